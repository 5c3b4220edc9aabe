//! # Custom Extractors & Validation
//!
//! Parse failures (malformed JSON, wrong types) become
//! [`AppError::BadRequest`]; domain validation failures become
//! [`AppError::Validation`].

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use msme_core::ValidationError;

use crate::error::AppError;

/// Request types that turn into a validated domain value.
pub trait Validate {
    /// The validated value handed to the handler.
    type Output;

    fn validate(&self) -> Result<Self::Output, ValidationError>;
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T::Output, AppError> {
    Ok(extract_json(result)?.validate()?)
}

/// Extract query parameters and validate them.
pub fn extract_validated_query<T: Validate>(
    result: Result<Query<T>, QueryRejection>,
) -> Result<T::Output, AppError> {
    let Query(value) = result.map_err(|err| AppError::BadRequest(err.body_text()))?;
    Ok(value.validate()?)
}
