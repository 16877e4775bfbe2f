//! Application error type with HTTP response conversion.
//!
//! [`AppError`] pairs a status code with a client-facing message. The message
//! is sent verbatim, so it must never carry internal detail (tokens, secrets,
//! library error text). Internal detail belongs in the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body for every failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {message}")]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Internal failures never expose their cause to the client.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), "responding with server error");
        }

        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_error_body_is_unsuccessful() {
        let body = ErrorBody::new("Access Denied");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"Access Denied"}"#);
    }

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(
            AppError::new(StatusCode::BAD_REQUEST, "x").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::forbidden("x").status, StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::internal().status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        assert_eq!(AppError::internal().message, "Internal server error");
    }

    #[tokio::test]
    async fn test_into_response_writes_json_body() {
        let message = "Session expired. Please login again.";
        let response = AppError::new(StatusCode::UNAUTHORIZED, message).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert!(!body.success);
        assert_eq!(body.message, message);
    }
}
