use std::path::PathBuf;

use axum::http::HeaderValue;
use sj_db::Backend;

use crate::auth::jwt::JwtConfig;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Database connection settings.
///
/// `DATABASE_URL` wins when present; otherwise the URL is assembled from the
/// individual `DB_*` variables.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub backend: Backend,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Static front-end files served as the router fallback.
    pub public_dir: PathBuf,
    /// Directory holding downloaded series images, served under `/images`.
    pub image_dir: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
    /// Session token configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `PUBLIC_DIR`           | `public`                   |
    /// | `IMAGE_DIR`            | `images`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | assembled from `DB_*`      |
    /// | `DB_DRIVER`            | `postgres`                 |
    /// | `DB_HOST`              | `localhost`                |
    /// | `DB_PORT`              | `5432`                     |
    /// | `DB_USER`              | `sj`                       |
    /// | `DB_PASS`              | (empty)                    |
    /// | `DB_NAME`              | `sj`                       |
    /// | `JWT_SECRET`           | required                   |
    /// | `JWT_EXPIRY_MINS`      | `1440`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", var("PORT", "3000"))?;
        let public_dir = PathBuf::from(var("PUBLIC_DIR", "public"));
        let image_dir = PathBuf::from(var("IMAGE_DIR", "images"));

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"))?;

        let database = match lookup("DATABASE_URL") {
            Some(url) => {
                let backend = Backend::from_url(&url).ok_or_else(|| ConfigError::Invalid {
                    var: "DATABASE_URL",
                    value: url.clone(),
                    reason: "unsupported scheme, expected postgres:// or sqlite:".into(),
                })?;
                DatabaseConfig { url, backend }
            }
            None => assemble_database_url(&var)?,
        };

        let jwt = JwtConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            public_dir,
            image_dir,
            cors_origins,
            request_timeout_secs,
            database,
            jwt,
        })
    }
}

fn assemble_database_url(var: &dyn Fn(&str, &str) -> String) -> Result<DatabaseConfig, ConfigError> {
    let driver = var("DB_DRIVER", "postgres");
    match driver.as_str() {
        "postgres" => {
            let host = var("DB_HOST", "localhost");
            let port: u16 = parse_var("DB_PORT", var("DB_PORT", "5432"))?;
            let user = var("DB_USER", "sj");
            let pass = var("DB_PASS", "");
            let name = var("DB_NAME", "sj");
            let credentials = if pass.is_empty() {
                user
            } else {
                format!("{user}:{pass}")
            };
            Ok(DatabaseConfig {
                url: format!("postgres://{credentials}@{host}:{port}/{name}"),
                backend: Backend::Postgres,
            })
        }
        "sqlite" => {
            let name = var("DB_NAME", "sj");
            Ok(DatabaseConfig {
                url: format!("sqlite://{name}.db?mode=rwc"),
                backend: Backend::Sqlite,
            })
        }
        other => Err(ConfigError::Invalid {
            var: "DB_DRIVER",
            value: other.to_string(),
            reason: "expected postgres or sqlite".into(),
        }),
    }
}

pub(crate) fn parse_var<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: name,
        reason: e.to_string(),
        value,
    })
}
