//! Request extractors and middleware shared by handlers.
//!
//! - [`auth::AuthUser`] -- Resolves the signed-in user through the session capability.
//! - [`body::RequestBody`] -- Buffers the raw body, failing inside the envelope.
//! - [`fallback`] -- Timeout and panic responses rendered as failure envelopes.

pub mod auth;
pub mod body;
pub mod fallback;
