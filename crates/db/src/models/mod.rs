//! Row models and their JSON representations.
//!
//! Field names on the wire follow the API's capitalised convention
//! (`ID`, `Title`, `SeriesID`, ...); column names stay snake_case.

pub mod episode_resource;
pub mod last_watched;
pub mod series;
pub mod user;
