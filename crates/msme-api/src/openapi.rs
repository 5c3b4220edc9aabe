//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MSME Compliance API",
        version = "0.1.0",
        description = "Maps an Indian MSME's turnover and head count to applicable GST, income-tax, ESIC, EPF and state obligations.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::compliance::run_check,
        crate::routes::compliance::list_rules,
        crate::routes::checks::latest_check,
        crate::routes::checks::list_checks,
        crate::routes::checks::clear_checks,
    ),
    components(schemas(
        crate::state::CheckRecord,
        crate::routes::compliance::CheckRequest,
        crate::routes::compliance::RuleView,
        crate::routes::checks::ClearedResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "compliance", description = "Compliance checks and rule table"),
        (name = "checks", description = "Check history"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
