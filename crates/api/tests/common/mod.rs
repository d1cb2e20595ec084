#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use sj_api::auth::jwt::JwtConfig;
use sj_api::auth::session::{JwtSessions, SessionAuthenticator};
use sj_api::config::{DatabaseConfig, ServerConfig};
use sj_api::images::{ImageError, ImageFetcher, ImageStore};
use sj_api::router::build_app_router;
use sj_api::state::AppState;
use sj_core::types::DbId;
use sj_db::{create_memory_pool, run_migrations, Backend, DbPool};

/// URLs containing this marker make [`StubFetcher`] fail with HTTP 404.
pub const MISSING_IMAGE: &str = "missing";
/// URLs containing this marker make [`StubFetcher`] stall for five seconds.
pub const SLOW_IMAGE: &str = "slow";
/// URLs containing this marker make [`StubFetcher`] panic.
pub const PANIC_IMAGE: &str = "explode";

/// Serves deterministic bytes derived from the URL instead of downloading.
pub struct StubFetcher;

#[async_trait]
impl ImageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        if url.contains(MISSING_IMAGE) {
            return Err(ImageError::Status(404));
        }
        if url.contains(SLOW_IMAGE) {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        }
        if url.contains(PANIC_IMAGE) {
            panic!("fetcher blew up on {url}");
        }
        Ok(format!("image bytes of {url}").into_bytes())
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub sessions: JwtSessions,
    /// Keeps the image and public directories alive for the test's duration.
    pub dir: TempDir,
}

impl TestApp {
    pub fn image_dir(&self) -> PathBuf {
        self.dir.path().join("images")
    }

    /// Mint a session token for any user id, existing or not.
    pub fn token_for(&self, user_id: DbId) -> String {
        self.sessions.issue(user_id).unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// Send `body` as-is and assert the transport status is 200.
    pub async fn call(&self, method: Method, uri: &str, token: Option<&str>, body: Body) -> Value {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let (status, json) = self.send(builder.body(body).unwrap()).await;
        assert_eq!(status, StatusCode::OK, "envelope responses are always 200");
        json
    }

    /// POST `{ "Data": data }`.
    pub async fn post(&self, uri: &str, token: Option<&str>, data: Value) -> Value {
        let body = Body::from(json!({ "Data": data }).to_string());
        self.call(Method::POST, uri, token, body).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Value {
        self.call(Method::GET, uri, token, Body::empty()).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Value {
        self.call(Method::DELETE, uri, token, Body::empty()).await
    }

    /// Register a user and sign in, returning `(user_id, token)`.
    pub async fn signed_in_user(&self, name: &str, password: &str) -> (DbId, String) {
        let created = self
            .post("/api/v1/users", None, json!({ "Name": name, "Password": password }))
            .await;
        assert_success(&created);

        let signed_in = self
            .post("/api/v1/sign-in", None, json!({ "Name": name, "Password": password }))
            .await;
        assert_success(&signed_in);

        let user_id = signed_in["Data"]["UserID"].as_i64().unwrap();
        let token = signed_in["Data"]["Token"].as_str().unwrap().to_string();
        (user_id, token)
    }

    /// Create a series through the API, returning its `Data` object.
    pub async fn create_series(&self, token: &str, title: &str, image_url: &str) -> Value {
        let json = self
            .post(
                "/api/v1/series",
                Some(token),
                json!({ "Title": title, "Image": image_url }),
            )
            .await;
        assert_success(&json);
        json["Data"].clone()
    }
}

pub fn assert_success(json: &Value) {
    assert_eq!(json["Status"], "success", "unexpected failure: {json}");
}

/// Assert a failure envelope and return its `Err` text.
pub fn assert_fail(json: &Value) -> String {
    assert_eq!(json["Status"], "fail", "unexpected success: {json}");
    assert!(json.get("Data").is_none());
    json["Err"].as_str().unwrap().to_string()
}

pub fn test_config(dir: &TempDir, request_timeout_secs: u64) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        public_dir: dir.path().join("public"),
        image_dir: dir.path().join("images"),
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            backend: Backend::Sqlite,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_mins: 15,
        },
    }
}

/// Full application router over a fresh in-memory database.
///
/// Uses the same [`build_app_router`] as `main.rs` so tests exercise the
/// production middleware stack.
pub async fn build_test_app() -> TestApp {
    build_test_app_with_timeout(30).await
}

pub async fn build_test_app_with_timeout(request_timeout_secs: u64) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("images")).unwrap();
    std::fs::create_dir_all(dir.path().join("public")).unwrap();

    let pool = create_memory_pool().await.unwrap();
    run_migrations(&pool, Backend::Sqlite).await.unwrap();

    let config = test_config(&dir, request_timeout_secs);
    let sessions = JwtSessions::new(config.jwt.clone());

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        sessions: Arc::new(sessions.clone()),
        image_fetcher: Arc::new(StubFetcher),
        image_store: ImageStore::new(config.image_dir.clone()),
    };

    TestApp {
        router: build_app_router(state),
        pool,
        sessions,
        dir,
    }
}
