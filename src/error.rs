//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{constants::VALIDATION_ERROR_MESSAGE, validation::ValidationFailure};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body failed its schema; carries every violation in order
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),
}

/// Body of a validation rejection
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub details: Vec<String>,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();

        match self {
            // Validation rejections keep their own flat shape
            AppError::Validation(details) => {
                let body = ValidationErrorResponse {
                    message: VALIDATION_ERROR_MESSAGE.to_string(),
                    details,
                };
                (status, Json(body)).into_response()
            }
            other => {
                let body = ErrorResponse {
                    error: ErrorDetails {
                        code,
                        message: other.to_string(),
                    },
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<ValidationFailure> for AppError {
    fn from(err: ValidationFailure) -> Self {
        AppError::Validation(err.into_details())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_shape() {
        let err = AppError::Validation(vec![
            "Full Name is required".to_string(),
            "Course is required".to_string(),
        ]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Validation error",
                "details": ["Full Name is required", "Course is required"],
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_input_uses_error_envelope() {
        let response = AppError::InvalidInput("Malformed JSON body".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
        assert_eq!(body["error"]["message"], "Invalid input: Malformed JSON body");
    }

    #[tokio::test]
    async fn test_payload_too_large_status() {
        let response = AppError::PayloadTooLarge(16).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(body["error"]["message"], "Request body exceeds 16 bytes");
    }
}
