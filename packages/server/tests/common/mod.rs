//! Test harness driving the router in-process with mocked collaborators.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use insights_core::domains::returns::{AnalysisStore, EvidenceMatcher, WordOverlapMatcher};
use insights_core::kernel::{MockAI, MockLanguageService, TestDependencies};
use insights_core::server::{build_router, AxumAppState};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub deps: TestDependencies,
    pub store: Arc<AnalysisStore>,
}

impl TestApp {
    pub fn new(ai: MockAI, language: MockLanguageService) -> Self {
        Self::with_matcher(ai, language, Arc::new(WordOverlapMatcher))
    }

    pub fn with_matcher(
        ai: MockAI,
        language: MockLanguageService,
        matcher: Arc<dyn EvidenceMatcher>,
    ) -> Self {
        let deps = TestDependencies::new(ai, language);
        let state = AxumAppState::new(deps.server_deps()).with_matcher(matcher);
        let store = state.store.clone();

        Self {
            router: build_router(state),
            deps,
            store,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MockAI::new(), MockLanguageService::new())
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, body)
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_empty(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST a CSV file as a multipart `file` field.
    pub async fn upload_csv(&self, uri: &str, csv: &str) -> (StatusCode, Value) {
        let boundary = "returns-test-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"returns.csv\"\r\nContent-Type: text/csv\r\n\r\n{csv}\r\n--{b}--\r\n",
            b = boundary,
            csv = csv
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }
}
