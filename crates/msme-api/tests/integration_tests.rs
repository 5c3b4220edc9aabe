//! # Integration Tests for msme-api
//!
//! Exercises the assembled router: health probes, the check → history flow,
//! validation versus empty results, simulated latency, metrics, the OpenAPI
//! document and a file-store-backed app surviving a restart.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use msme_api::config::AppConfig;
use msme_api::state::AppState;
use msme_rules::RuleEngine;
use msme_store::MemoryStore;

fn test_app() -> axum::Router {
    msme_api::app(AppState::new())
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_check(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/compliance/check")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

#[tokio::test]
async fn test_readiness_fails_on_corrupt_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("compliance.latest_check.json"), b"{{").unwrap();
    let state = AppState::from_config(AppConfig {
        store_dir: Some(dir.path().to_path_buf()),
        ..AppConfig::default()
    })
    .unwrap();
    let response = msme_api::app(state)
        .oneshot(get("/health/readiness"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// -- Check Flow ---------------------------------------------------------------

#[tokio::test]
async fn test_full_trigger_profile_returns_all_eight_in_order() {
    let response = test_app()
        .oneshot(post_check(serde_json::json!({
            "turnover": 60_000_000,
            "employee_count": 25
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Found 8 applicable compliances.");

    let names: Vec<&str> = json["data"]["report"]["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "GST Registration",
            "Tax Audit (Section 44AB)",
            "ESIC Registration",
            "EPF Registration",
            "Shops & Establishment Act",
            "TDS Compliance",
            "Professional Tax",
            "Transfer Pricing Documentation",
        ]
    );
    assert_eq!(json["data"]["report"]["summary"]["critical"], 4);
    assert_eq!(json["data"]["report"]["summary"]["highest"], "Critical");
}

#[tokio::test]
async fn test_check_is_recorded_in_latest_and_history() {
    let state = AppState::new();
    let app = msme_api::app(state);

    let response = app
        .clone()
        .oneshot(post_check(serde_json::json!({"employee_count": 12})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["data"]["id"].clone();

    let latest = body_json(
        app.clone()
            .oneshot(get("/v1/compliance/checks/latest"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(latest["data"]["id"], id);
    assert_eq!(latest["data"]["profile"]["employee_count"], 12);

    let history = body_json(app.oneshot(get("/v1/compliance/checks")).await.unwrap()).await;
    assert_eq!(history["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_validation_failure_is_not_recorded() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_check(serde_json::json!({"turnover": -500})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .oneshot(get("/v1/compliance/checks/latest"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/compliance/check")
                .header("content-type", "application/json")
                .body(Body::from("{\"turnover\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_succeeds_over_corrupt_history() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("compliance.check_history.json"), b"{{").unwrap();
    let state = AppState::from_config(AppConfig {
        store_dir: Some(dir.path().to_path_buf()),
        ..AppConfig::default()
    })
    .unwrap();
    let app = msme_api::app(state);

    let response = app
        .clone()
        .oneshot(post_check(serde_json::json!({"turnover": 5_000_000})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["data"]["id"].clone();

    let latest = body_json(
        app.clone()
            .oneshot(get("/v1/compliance/checks/latest"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(latest["data"]["id"], id);

    let history = body_json(app.oneshot(get("/v1/compliance/checks")).await.unwrap()).await;
    let entries = history["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], id);
}

#[tokio::test]
async fn test_simulated_latency_delays_response() {
    let config = AppConfig {
        simulated_latency_ms: 50,
        ..AppConfig::default()
    };
    let state = AppState::with_parts(config, RuleEngine::default(), Arc::new(MemoryStore::new()));
    let started = Instant::now();
    let response = msme_api::app(state)
        .oneshot(post_check(serde_json::json!({"turnover": 1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_history_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        store_dir: Some(dir.path().to_path_buf()),
        ..AppConfig::default()
    };

    let first = msme_api::app(AppState::from_config(config.clone()).unwrap());
    let response = first
        .oneshot(post_check(serde_json::json!({"turnover": 12_000_000})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let second = msme_api::app(AppState::from_config(config).unwrap());
    let latest = body_json(second.oneshot(get("/v1/compliance/checks/latest")).await.unwrap()).await;
    assert_eq!(latest["data"]["profile"]["turnover"], 12_000_000);
    assert_eq!(latest["data"]["report"]["summary"]["total"], 3);
}

// -- Rules --------------------------------------------------------------------

#[tokio::test]
async fn test_rules_without_profile_omit_triggered() {
    let json = body_json(test_app().oneshot(get("/v1/compliance/rules")).await.unwrap()).await;
    let rules = json["data"].as_array().unwrap();
    assert_eq!(rules.len(), 8);
    assert!(rules.iter().all(|r| r.get("triggered").is_none()));
    assert_eq!(rules[0]["risk"], "High (Critical when turnover > ₹40.0L)");
}

#[tokio::test]
async fn test_rules_reject_non_numeric_query() {
    let response = test_app()
        .oneshot(get("/v1/compliance/rules?turnover=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// -- Metrics & OpenAPI --------------------------------------------------------

#[tokio::test]
async fn test_metrics_count_requests_and_errors() {
    let app = test_app();
    app.clone()
        .oneshot(post_check(serde_json::json!({"turnover": 1})))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(post_check(serde_json::json!({"turnover": -1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = body_string(response).await;
    // The /metrics request itself is counted after the body is rendered.
    assert!(text.contains("msme_http_requests_total 2\n"), "{text}");
    assert!(text.contains("msme_http_errors_total 1\n"), "{text}");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = test_app().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["info"]["title"], "MSME Compliance API");
    assert!(json["paths"]["/v1/compliance/check"].is_object());
}
