//! JSON extractor whose rejections use the result envelope

use axum::{
    extract::{rejection::JsonRejection as AxumJsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiErrorResponse;

/// Drop-in replacement for `axum::Json`.
///
/// A body that cannot be read or parsed produces
/// `{"success": false, "message": ..., "code": "json_parse_error"}` with the
/// status axum chose for the rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

/// Rejection returned when the body is not acceptable JSON
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    message: String,
}

impl JsonRejection {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AxumJsonRejection> for JsonRejection {
    fn from(rejection: AxumJsonRejection) -> Self {
        let message = match &rejection {
            AxumJsonRejection::JsonDataError(err) => {
                format!("Invalid JSON data: {}", err.body_text())
            }
            AxumJsonRejection::JsonSyntaxError(err) => {
                format!("Invalid JSON syntax: {}", err.body_text())
            }
            AxumJsonRejection::MissingJsonContentType(_) => {
                "Missing Content-Type header. Expected 'application/json'.".to_string()
            }
            AxumJsonRejection::BytesRejection(err) => {
                format!("Failed to read request body: {}", err.body_text())
            }
            _ => "Invalid JSON request".to_string(),
        };

        Self {
            status: rejection.status(),
            message,
        }
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        let response = ApiErrorResponse {
            success: false,
            message: self.message,
            field: None,
            code: Some("json_parse_error".to_string()),
        };

        (self.status, AxumJson(response)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AxumJson(value) = AxumJson::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
