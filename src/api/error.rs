//! HTTP error responses
//!
//! Maps [`GreetingsError`] and extractor rejections onto status codes and a
//! JSON error body. Server-side failures are logged here and reported to the
//! client without detail.

use crate::domain::{FieldError, GreetingsError};
use crate::log_error_with_context;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Error body returned for every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// Error returned by request handlers
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    errors: Vec<FieldError>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status.as_u16(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: self.message.clone(),
            errors: self.errors.clone(),
        }
    }
}

impl From<GreetingsError> for ApiError {
    fn from(err: GreetingsError) -> Self {
        if !err.is_client_error() {
            log_error_with_context!(&err, "Request failed");
            return Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE);
        }

        match err {
            GreetingsError::Validation(errors) => Self {
                status: StatusCode::BAD_REQUEST,
                message: "Validation failed".to_string(),
                errors,
            },
            not_found => Self::new(StatusCode::NOT_FOUND, not_found.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
        let status = match &rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Rejected path parameter");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}
