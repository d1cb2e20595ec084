//! Domain building blocks shared by the database and API crates.

pub mod error;
pub mod hashing;
pub mod images;
pub mod request;
pub mod types;
