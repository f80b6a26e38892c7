//! Router test harness backed by the in-memory store.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use coffee_api::config::DEFAULT_BODY_LIMIT;
use coffee_api::{app, AppState, CoffeeStore, ErrorDetail, MemoryCoffeeStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryCoffeeStore>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        Self::build(ErrorDetail::Redact, DEFAULT_BODY_LIMIT)
    }

    pub fn build(detail: ErrorDetail, body_limit: usize) -> Self {
        let store = Arc::new(MemoryCoffeeStore::new());
        let state = AppState::new(store.clone()).with_error_detail(detail);
        TestApp {
            router: app(state, body_limit),
            store,
        }
    }

    /// Insert `count` rows named "coffee 1", "coffee 2", ...
    pub async fn seed(&self, count: usize) {
        for i in 1..=count {
            self.store
                .insert(&format!("coffee {i}"))
                .await
                .expect("seed coffee");
        }
    }

    /// Send a request with an optional JSON body and parse the JSON response.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (content_type, raw) = match body {
            Some(v) => (Some("application/json"), v.to_string()),
            None => (None, String::new()),
        };
        let (status, text) = self.send(method, uri, content_type, raw).await;
        (status, parse(&text))
    }

    /// Send a raw body with the given content type and return the response body as text.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: String,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        if !body.is_empty() {
            builder = builder.header(header::CONTENT_LENGTH, body.len());
        }
        let req = builder.body(Body::from(body)).expect("build request");
        let response = self.router.clone().oneshot(req).await.expect("route request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[allow(dead_code)]
pub fn parse(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
