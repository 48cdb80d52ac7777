//! Integration tests for POST /analyze and POST /analyze/csv.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use insights_core::kernel::{MockAI, MockLanguageService};
use serde_json::json;

#[tokio::test]
async fn analyze_returns_snapshot_with_both_signals() {
    let app = TestApp::new(
        MockAI::new().with_response("```json\n{\"dominant_reasons\": [\"runs small\"]}\n```"),
        MockLanguageService::new().with_document("negative", &["size chart", "runs small"]),
    );

    let (status, body) = app
        .post_json(
            "/analyze",
            json!({"returns": [{"sku": "SKU-1", "reason": "Runs small, had to send back"}]}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["warnings"], json!([]));

    let analysis = &body["analysis"];
    assert_eq!(analysis["total_returns"], 1);
    assert_eq!(analysis["version"], 1);
    assert_eq!(analysis["language_signals"]["sentiments"][0]["sentiment"], "negative");
    assert_eq!(
        analysis["language_signals"]["key_phrases"],
        json!(["size chart", "runs small"])
    );
    assert_eq!(
        analysis["analysis_summary"],
        "{\"dominant_reasons\": [\"runs small\"]}"
    );
    assert_eq!(analysis["status"]["language"]["state"], "ok");
}

#[tokio::test]
async fn analyze_accepts_bare_array() {
    let app = TestApp::with_defaults();

    let (status, body) = app
        .post_json("/analyze", json!([{"reason": "late"}, {"reason": "broken"}]))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["total_returns"], 2);
}

#[tokio::test]
async fn empty_batch_still_calls_summarizer() {
    let app = TestApp::with_defaults();

    let (status, body) = app.post_json("/analyze", json!({"returns": []})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["analysis"]["language_signals"],
        json!({"sentiments": [], "key_phrases": []})
    );
    assert_eq!(body["analysis"]["status"]["language"]["state"], "skipped");
    assert_eq!(app.deps.language.call_count(), 0);
    assert_eq!(app.deps.ai.call_count(), 1);
}

#[tokio::test]
async fn extractor_failure_is_reported_as_warning() {
    let app = TestApp::new(
        MockAI::new().with_response("{}"),
        MockLanguageService::new().failing("quota exceeded"),
    );

    let (status, body) = app
        .post_json("/analyze", json!({"returns": [{"reason": "scratched"}]}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["status"]["language"]["state"], "degraded");
    assert_eq!(body["analysis"]["language_signals"]["sentiments"], json!([]));
    assert_eq!(
        body["warnings"],
        json!(["language analysis unavailable: quota exceeded"])
    );
}

#[tokio::test]
async fn each_analyze_replaces_the_store() {
    let app = TestApp::with_defaults();

    app.post_json("/analyze", json!([{"reason": "a"}, {"reason": "b"}]))
        .await;
    app.post_json("/analyze", json!([{"reason": "c"}])).await;

    let snapshot = app.store.snapshot().await.unwrap();
    assert_eq!(snapshot.version, 2);
    assert_eq!(snapshot.total_returns, 1);
}

#[tokio::test]
async fn non_object_records_are_rejected() {
    let app = TestApp::with_defaults();

    let (status, body) = app.post_json("/analyze", json!({"returns": [1, 2]})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(app.store.snapshot().await.is_none());
}

#[tokio::test]
async fn unparseable_json_is_bad_request() {
    let app = TestApp::with_defaults();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"returns\": ["))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(app.deps.ai.call_count(), 0);
}

#[tokio::test]
async fn csv_upload_feeds_return_reasons_to_analysis() {
    let app = TestApp::with_defaults();
    let csv = "sku,category,return_reason\nSKU-1,Apparel,Too small\nSKU-2,Apparel,\nSKU-3,Shoes,Arrived late\n";

    let (status, body) = app.upload_csv("/analyze/csv", csv).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["total_returns"], 2);
    assert_eq!(
        app.deps.language.calls(),
        vec![vec!["Too small".to_string(), "Arrived late".to_string()]]
    );
}

#[tokio::test]
async fn csv_missing_column_is_bad_request() {
    let app = TestApp::with_defaults();

    let (status, body) = app
        .upload_csv("/analyze/csv", "sku,return_reason\nSKU-1,late\n")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required column: category");
    assert_eq!(app.deps.ai.call_count(), 0);
}
