//! API error type rendered with the same envelope as admission results

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::admission::SubmissionError;

/// Error body: `{"success": false, "message": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                success: false,
                message: message.into(),
                field: None,
                code: None,
            },
        }
    }

    /// Add the offending field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.response.field = Some(field.into());
        self
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.code = Some(code.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        Self::bad_request(err.message)
            .with_field(err.field)
            .with_code("validation_error")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("The name is required");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(!err.response.success);
        assert_eq!(err.response.message, "The name is required");
    }

    #[test]
    fn test_submission_error_conversion() {
        let err: ApiError = SubmissionError {
            field: "email",
            message: "The email is not valid".to_string(),
        }
        .into();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.field.as_deref(), Some("email"));
        assert_eq!(err.response.code.as_deref(), Some("validation_error"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::bad_request("The phone is required").with_field("phone");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "The phone is required");
        assert_eq!(json["field"], "phone");
        assert!(json.get("code").is_none());
    }
}
