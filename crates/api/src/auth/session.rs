//! The session capability injected into [`crate::state::AppState`].
//!
//! Handlers never look at tokens themselves: they ask a
//! [`SessionAuthenticator`] which user a request belongs to, and ask it for a
//! token when a user signs in.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use sj_core::error::CoreError;
use sj_core::types::DbId;

use crate::auth::jwt::{generate_token, validate_token, JwtConfig};

pub trait SessionAuthenticator: Send + Sync {
    /// Resolve the user id behind a request, or fail with `Unauthorized`.
    fn authenticate(&self, headers: &HeaderMap) -> Result<DbId, CoreError>;

    /// Issue a session token for a user who just proved their identity.
    fn issue(&self, user_id: DbId) -> Result<String, CoreError>;
}

/// Bearer-token sessions backed by signed JWTs.
#[derive(Debug, Clone)]
pub struct JwtSessions {
    config: JwtConfig,
}

impl JwtSessions {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl SessionAuthenticator for JwtSessions {
    fn authenticate(&self, headers: &HeaderMap) -> Result<DbId, CoreError> {
        let auth_header = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            CoreError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".into())
        })?;

        let claims = validate_token(token, &self.config)
            .map_err(|_| CoreError::Unauthorized("Invalid or expired session".into()))?;

        Ok(claims.sub)
    }

    fn issue(&self, user_id: DbId) -> Result<String, CoreError> {
        generate_token(user_id, &self.config)
            .map_err(|e| CoreError::Internal(format!("Token generation error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    use super::*;

    fn sessions() -> JwtSessions {
        JwtSessions::new(JwtConfig {
            secret: "unit-test-secret".into(),
            expiry_mins: 5,
        })
    }

    #[test]
    fn issued_token_authenticates() {
        let sessions = sessions();
        let token = sessions.issue(7).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        assert_eq!(sessions.authenticate(&headers).unwrap(), 7);
    }

    #[test]
    fn missing_or_malformed_header_is_unauthorized() {
        let sessions = sessions();
        assert_matches!(
            sessions.authenticate(&HeaderMap::new()),
            Err(CoreError::Unauthorized(_))
        );

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Token abc"));
        assert_matches!(
            sessions.authenticate(&headers),
            Err(CoreError::Unauthorized(_))
        );

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer not-a-jwt"));
        assert_matches!(
            sessions.authenticate(&headers),
            Err(CoreError::Unauthorized(_))
        );
    }
}
