//! # Check History API
//!
//! Read and clear persisted compliance checks.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::routes::ApiResponse;
use crate::state::{AppState, CheckRecord};

/// Result of clearing check history.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClearedResponse {
    /// Whether any record existed before clearing.
    pub cleared: bool,
}

/// Build the checks router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/compliance/checks", get(list_checks).delete(clear_checks))
        .route("/v1/compliance/checks/latest", get(latest_check))
}

/// GET /v1/compliance/checks/latest: The most recent check.
#[utoipa::path(
    get,
    path = "/v1/compliance/checks/latest",
    responses(
        (status = 200, description = "Envelope whose data is the latest check", body = CheckRecord),
        (status = 404, description = "No check has been run", body = crate::error::ErrorBody),
    ),
    tag = "checks"
)]
pub(crate) async fn latest_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CheckRecord>>, AppError> {
    let record = state
        .with_store(|s| s.latest_check())
        .await?
        .ok_or_else(|| AppError::NotFound("no compliance check has been run".to_string()))?;
    Ok(Json(ApiResponse::ok(record)))
}

/// GET /v1/compliance/checks: Check history, newest first.
#[utoipa::path(
    get,
    path = "/v1/compliance/checks",
    responses(
        (status = 200, description = "Envelope whose data is the check history", body = [CheckRecord]),
    ),
    tag = "checks"
)]
pub(crate) async fn list_checks(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CheckRecord>>>, AppError> {
    let history = state.with_store(|s| s.check_history()).await?;
    let message = format!("{} checks recorded.", history.len());
    Ok(Json(ApiResponse::ok(history).with_message(message)))
}

/// DELETE /v1/compliance/checks: Forget the latest check and the history.
#[utoipa::path(
    delete,
    path = "/v1/compliance/checks",
    responses(
        (status = 200, description = "Envelope reporting whether anything was cleared", body = ClearedResponse),
    ),
    tag = "checks"
)]
pub(crate) async fn clear_checks(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ClearedResponse>>, AppError> {
    let cleared = state.with_store(|s| s.clear_checks()).await?;
    tracing::info!(cleared, "check history cleared");
    Ok(Json(ApiResponse::ok(ClearedResponse { cleared })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use msme_core::BusinessProfile;
    use tower::ServiceExt;

    fn seeded_state() -> AppState {
        let state = AppState::new();
        for turnover in [1_000_000, 2_000_000] {
            let report = state.engine.check(&BusinessProfile::new(turnover, 3));
            state.record_check(&CheckRecord::new(report)).unwrap();
        }
        state
    }

    async fn send(state: AppState, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router()
            .with_state(state)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn latest_is_404_before_any_check() {
        let (status, json) = send(AppState::new(), "GET", "/v1/compliance/checks/latest").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn latest_returns_newest_record() {
        let (status, json) = send(seeded_state(), "GET", "/v1/compliance/checks/latest").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["profile"]["turnover"], 2_000_000);
    }

    #[tokio::test]
    async fn history_is_newest_first() {
        let (status, json) = send(seeded_state(), "GET", "/v1/compliance/checks").await;
        assert_eq!(status, StatusCode::OK);
        let turnovers: Vec<u64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["profile"]["turnover"].as_u64().unwrap())
            .collect();
        assert_eq!(turnovers, vec![2_000_000, 1_000_000]);
        assert_eq!(json["message"], "2 checks recorded.");
    }

    #[tokio::test]
    async fn delete_clears_everything() {
        let state = seeded_state();
        let (status, json) = send(state.clone(), "DELETE", "/v1/compliance/checks").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["cleared"], true);

        let (status, _) = send(state.clone(), "GET", "/v1/compliance/checks/latest").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (_, json) = send(state, "DELETE", "/v1/compliance/checks").await;
        assert_eq!(json["data"]["cleared"], false);
    }
}
