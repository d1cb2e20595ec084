//! JWT session-token generation and validation.
//!
//! Session tokens are HS256-signed JWTs containing a [`Claims`] payload whose
//! subject is the user id.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sj_core::types::DbId;
use uuid::Uuid;

use crate::config::{parse_var, ConfigError};

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in minutes (default: 1440).
    pub expiry_mins: i64,
}

/// Default token expiry in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 24 * 60;

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_EXPIRY_MINS`.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let expiry_mins = match lookup("JWT_EXPIRY_MINS") {
            Some(value) => parse_var("JWT_EXPIRY_MINS", value)?,
            None => DEFAULT_EXPIRY_MINS,
        };

        Ok(Self {
            secret,
            expiry_mins,
        })
    }
}

/// Generate an HS256 session token for the given user.
pub fn generate_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: now + config.expiry_mins * 60,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_mins: 15,
        }
    }

    #[test]
    fn generated_token_validates() {
        let config = sample_config();
        let token = generate_token(42, &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = sample_config();

        // Well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            expiry_mins: 15,
        };

        let token = generate_token(1, &sample_config()).expect("token generation should succeed");
        assert!(validate_token(&token, &config_b).is_err());
    }

    #[test]
    fn config_requires_secret() {
        let missing = JwtConfig::from_lookup(&|_: &str| -> Option<String> { None });
        assert!(matches!(missing, Err(ConfigError::Missing("JWT_SECRET"))));

        let empty = JwtConfig::from_lookup(&|_: &str| -> Option<String> { Some(String::new()) });
        assert!(empty.is_err());

        let ok = JwtConfig::from_lookup(&|key: &str| -> Option<String> {
            match key {
                "JWT_SECRET" => Some("abc".into()),
                "JWT_EXPIRY_MINS" => Some("5".into()),
                _ => None,
            }
        })
        .unwrap();
        assert_eq!(ok.expiry_mins, 5);
    }
}
