//! # Compliance Check API
//!
//! `POST /v1/compliance/check` validates the profile, waits for the
//! configured latency, evaluates the rule table and records the result.
//! `GET /v1/compliance/rules` lists the rule table, optionally marking which
//! rules a profile triggers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use msme_core::{BusinessProfile, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, extract_validated_query, Validate};
use crate::routes::ApiResponse;
use crate::state::{AppState, CheckRecord};

/// Compliance check request. Missing fields count as zero, but at least
/// one must be present.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckRequest {
    /// Annual turnover in whole rupees.
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 5000000)]
    pub turnover: Option<Number>,
    /// Number of employees.
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 12)]
    pub employee_count: Option<Number>,
}

/// JSON numbers arrive as integers or floats; only whole values are amounts.
///
/// Range checks happen in [`BusinessProfile::try_new`]. Integral floats
/// beyond `i128` saturate and are rejected there as out of range.
fn whole_number(field: &str, value: Option<&Number>) -> Result<Option<i128>, ValidationError> {
    let Some(number) = value else {
        return Ok(None);
    };
    if let Some(n) = number.as_i64() {
        return Ok(Some(i128::from(n)));
    }
    if let Some(n) = number.as_u64() {
        return Ok(Some(i128::from(n)));
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(Some(f as i128)),
        _ => Err(ValidationError::NonIntegralAmount(field.to_string())),
    }
}

impl Validate for CheckRequest {
    type Output = BusinessProfile;

    fn validate(&self) -> Result<BusinessProfile, ValidationError> {
        BusinessProfile::from_optional(
            whole_number("turnover", self.turnover.as_ref())?,
            whole_number("employee_count", self.employee_count.as_ref())?,
        )
    }
}

/// Optional profile for rule inspection.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RulesQuery {
    pub turnover: Option<i64>,
    pub employee_count: Option<i64>,
}

impl Validate for RulesQuery {
    type Output = Option<BusinessProfile>;

    fn validate(&self) -> Result<Option<BusinessProfile>, ValidationError> {
        match BusinessProfile::from_optional(
            self.turnover.map(i128::from),
            self.employee_count.map(i128::from),
        ) {
            Ok(profile) => Ok(Some(profile)),
            Err(ValidationError::EmptyProfile) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// One rule of the table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RuleView {
    /// Stable identifier, e.g. `esic_registration`.
    pub obligation: String,
    /// Finding name produced when the rule fires.
    pub result: String,
    /// Trigger condition, e.g. `employees >= 10`.
    pub condition: String,
    /// Risk level, with its escalation condition if any.
    pub risk: String,
    pub deadline: String,
    pub penalty: String,
    pub law: String,
    /// Whether the queried profile triggers this rule. Absent without a profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered: Option<bool>,
}

/// Build the compliance router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/compliance/check", post(run_check))
        .route("/v1/compliance/rules", get(list_rules))
}

/// POST /v1/compliance/check: Evaluate a business profile.
#[utoipa::path(
    post,
    path = "/v1/compliance/check",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Envelope whose data is the recorded check", body = CheckRecord),
        (status = 400, description = "Malformed JSON or non-numeric field", body = crate::error::ErrorBody),
        (status = 422, description = "Negative, fractional or missing values", body = crate::error::ErrorBody),
    ),
    tag = "compliance"
)]
pub(crate) async fn run_check(
    State(state): State<AppState>,
    body: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CheckRecord>>, AppError> {
    let profile = extract_validated_json(body)?;

    let latency = state.config.simulated_latency();
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let record = CheckRecord::new(state.engine.check(&profile));
    let record = state
        .with_store(move |s| s.record_check(&record).map(|()| record))
        .await?;
    tracing::info!(
        check_id = %record.id,
        findings = record.report.summary.total,
        highest = ?record.report.summary.highest,
        "compliance check recorded"
    );

    let message = record.report.message.clone();
    Ok(Json(ApiResponse::ok(record).with_message(message)))
}

/// GET /v1/compliance/rules: The rule table, in declaration order.
#[utoipa::path(
    get,
    path = "/v1/compliance/rules",
    params(RulesQuery),
    responses(
        (status = 200, description = "Envelope whose data is the rule table", body = [RuleView]),
        (status = 422, description = "Negative values", body = crate::error::ErrorBody),
    ),
    tag = "compliance"
)]
pub(crate) async fn list_rules(
    State(state): State<AppState>,
    query: Result<Query<RulesQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<RuleView>>>, AppError> {
    let profile = extract_validated_query(query)?;
    let rules = state
        .engine
        .rules()
        .iter()
        .map(|rule| RuleView {
            obligation: rule.obligation.as_str().to_string(),
            result: rule.name().to_string(),
            condition: rule.trigger.describe(),
            risk: rule.risk.describe(),
            deadline: rule.deadline.to_string(),
            penalty: rule.penalty.to_string(),
            law: rule.law.to_string(),
            triggered: profile.as_ref().map(|p| rule.applies(p)),
        })
        .collect();
    Ok(Json(ApiResponse::ok(rules)))
}
