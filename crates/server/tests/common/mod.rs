//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock Artsy dependencies injected, enabling E2E testing without
//! network access.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use artscope_core::{
    testing::{MockArtsyApi, MockTokenProvider},
    ArtsyApi, Config, TokenProvider,
};

/// Re-export fixtures for test convenience
pub use artscope_core::testing::fixtures;

/// Marker text placed in the fixture's index.html.
pub const INDEX_MARKER: &str = "Artist Search";

/// Test fixture for E2E testing with mock dependencies.
///
/// Provides an in-process server with fully controllable mocks for:
/// - Token exchange (MockTokenProvider)
/// - Artsy API (MockArtsyApi)
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///     fixture.artsy.set_search_results(vec![fixtures::search_result("abc", "Andy Warhol")]).await;
///
///     let response = fixture.get("/search?q=warhol").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock token provider - configure success/failure
    pub tokens: Arc<MockTokenProvider>,
    /// Mock Artsy API - configure upstream responses
    pub artsy: Arc<MockArtsyApi>,
    /// Temporary directory holding the static front end
    pub static_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Body parsed as JSON (`Null` when empty or not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture whose token provider issues `"T1"`.
    pub async fn new() -> Self {
        Self::with_tokens(MockTokenProvider::with_token("T1")).await
    }

    /// Create a test fixture whose token exchange always fails.
    pub async fn with_failing_tokens() -> Self {
        Self::with_tokens(MockTokenProvider::failing()).await
    }

    /// Create a test fixture with a specific token provider.
    pub async fn with_tokens(tokens: MockTokenProvider) -> Self {
        let static_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(
            static_dir.path().join("index.html"),
            format!(
                "<!doctype html><html><head><title>{}</title></head><body></body></html>",
                INDEX_MARKER
            ),
        )
        .expect("Failed to write index.html");
        std::fs::write(static_dir.path().join("script.js"), "console.log('ok');")
            .expect("Failed to write script.js");

        let tokens = Arc::new(tokens);
        let artsy = Arc::new(MockArtsyApi::new());

        let mut config = Config::default();
        config.frontend.static_dir = static_dir.path().to_path_buf();

        let state = Arc::new(artscope_server::state::AppState::new(
            config,
            Arc::clone(&tokens) as Arc<dyn TokenProvider>,
            Arc::clone(&artsy) as Arc<dyn ArtsyApi>,
        ));

        let router = artscope_server::api::create_router(state);

        Self {
            router,
            tokens,
            artsy,
            static_dir,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.get_with_headers(path, &[]).await
    }

    /// Send a GET request with extra headers.
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}

/// Helper to assert an error envelope.
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $message:expr) => {
        assert_status!($response, $status);
        assert_eq!($response.body, serde_json::json!({ "error": $message }));
    };
}
