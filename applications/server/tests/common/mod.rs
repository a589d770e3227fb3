//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use tune_deezer::{ClientConfig, DeezerClient};
use tune_server::{api, services::AuthService, state::AppState};
use tune_storage::{StorageContext, StoragePaths};

/// Nothing listens here; used when a test never reaches the proxy
pub const UNUSED_UPSTREAM: &str = "http://127.0.0.1:9";

/// A router over a fresh data directory
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<StorageContext>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_upstream(UNUSED_UPSTREAM).await
    }

    pub async fn with_upstream(base_url: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(StorageContext::new(StoragePaths::in_dir(temp_dir.path())));
        storage.initialize().await.unwrap();

        // Lowest bcrypt cost keeps the account tests fast
        let auth_service = Arc::new(AuthService::new(4));
        let deezer = Arc::new(DeezerClient::new(ClientConfig::new(base_url)).unwrap());

        let app_state = AppState::new(Arc::clone(&storage), auth_service, deezer);

        Self {
            router: api::create_router(app_state),
            storage,
            temp_dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method("DELETE")
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("POST", uri, body.to_string()).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("PATCH", uri, body.to_string()).await
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .method(method)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };

        (status, body)
    }
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_USERNAME: &str = "alice";
    pub const TEST_EMAIL: &str = "alice@example.com";
    pub const TEST_PASSWORD: &str = "Password1";
}
