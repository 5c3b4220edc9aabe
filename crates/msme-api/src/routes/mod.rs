//! # API Route Modules
//!
//! - [`compliance`]: run a check, inspect the rule table.
//! - [`checks`]: the latest check and check history.
//!
//! Successful responses share the [`ApiResponse`] envelope.

pub mod checks;
pub mod compliance;

use serde::{Deserialize, Serialize};

/// Success envelope: `{ "success": true, "data": ..., "message": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_omitted_when_absent() {
        let json = serde_json::to_value(ApiResponse::ok(3)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 3}));

        let json = serde_json::to_value(ApiResponse::ok(3).with_message("hi")).unwrap();
        assert_eq!(json["message"], "hi");
    }
}
