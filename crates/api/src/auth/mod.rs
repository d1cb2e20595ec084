//! Session authentication.
//!
//! - [`jwt`] -- HS256 session-token generation and validation.
//! - [`session`] -- the [`session::SessionAuthenticator`] capability handlers
//!   depend on, and its JWT implementation.

pub mod jwt;
pub mod session;
