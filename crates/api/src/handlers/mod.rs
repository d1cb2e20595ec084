//! Request handlers, one submodule per resource.
//!
//! Handlers read raw bodies and validate them with [`sj_core::request`], so
//! malformed input produces the same failure envelope as any other error.
//! Path ids are parsed by hand, and query strings and bodies go through
//! extractors that reject with [`crate::error::AppError`], for the same reason.

pub mod episode_resource;
pub mod health;
pub mod last_watched;
pub mod series;
pub mod series_list;
pub mod session;
pub mod users;

use sj_core::types::DbId;

use crate::error::AppError;

/// Parse a numeric path segment.
pub(crate) fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid id '{raw}'")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_numeric_ids_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_matches!(parse_id("abc"), Err(AppError::BadRequest(_)));
        assert_matches!(parse_id(""), Err(AppError::BadRequest(_)));
    }
}
