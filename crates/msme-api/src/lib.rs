//! # msme-api: HTTP Adapter for the Compliance Rule Engine
//!
//! Validates input, applies the optional simulated latency, evaluates the
//! shared rule table and records each check through the persistence
//! collaborator.
//!
//! ## API Surface
//!
//! | Route | Module | Purpose |
//! |---|---|---|
//! | `POST /v1/compliance/check` | [`routes::compliance`] | Run a check |
//! | `GET /v1/compliance/rules` | [`routes::compliance`] | Rule table |
//! | `GET /v1/compliance/checks[/latest]` | [`routes::checks`] | Check history |
//! | `DELETE /v1/compliance/checks` | [`routes::checks`] | Clear history |
//! | `GET /metrics` | [`middleware::metrics`] | Request counters |
//! | `GET /openapi.json` | [`openapi`] | OpenAPI document |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use msme_store::{EntityKey, KeyValueStore};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes are mounted outside the metrics layer.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .merge(routes::compliance::router())
        .merge(routes::checks::router())
        .merge(openapi::router())
        .route("/metrics", get(middleware::metrics::metrics_handler))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(metrics))
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Liveness probe - always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe - 200 once the store answers a read.
async fn readiness(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state
        .with_store(|s| s.store.load_value(EntityKey::LatestCheck))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "readiness check failed");
            AppError::ServiceUnavailable("store is not readable".to_string())
        })?;
    Ok("ready")
}
