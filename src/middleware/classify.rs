//! Mapping from gate failures to wire responses.
//!
//! The status/message pairs are part of the client contract. Front ends
//! match on the message text to decide between a silent re-login and a full
//! logout, so these strings must not change.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use marketplace_auth::{AuthError, Channel};
use marketplace_core::AppError;

pub const ACCESS_DENIED: &str = "Access Denied";
pub const LOGIN_REQUIRED: &str = "Authentication required. Please login.";
pub const INVALID_TOKEN: &str = "Invalid Token";
pub const INVALID_SESSION: &str = "Invalid session. Please login again.";
pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

pub fn classify(channel: Channel, error: AuthError) -> (StatusCode, &'static str) {
    match (channel, error) {
        (Channel::Header, AuthError::MissingCredential) => (StatusCode::UNAUTHORIZED, ACCESS_DENIED),
        (Channel::Cookie, AuthError::MissingCredential) => {
            (StatusCode::UNAUTHORIZED, LOGIN_REQUIRED)
        }
        (Channel::Header, AuthError::Malformed | AuthError::InvalidSignature) => {
            (StatusCode::BAD_REQUEST, INVALID_TOKEN)
        }
        (Channel::Cookie, AuthError::Malformed | AuthError::InvalidSignature) => {
            (StatusCode::UNAUTHORIZED, INVALID_SESSION)
        }
        (_, AuthError::Expired) => (StatusCode::UNAUTHORIZED, SESSION_EXPIRED),
    }
}

/// A terminal gate failure: the pipeline stops and this becomes the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateRejection {
    pub channel: Channel,
    pub error: AuthError,
}

impl GateRejection {
    pub fn new(channel: Channel, error: AuthError) -> Self {
        Self { channel, error }
    }
}

impl From<GateRejection> for AppError {
    fn from(rejection: GateRejection) -> Self {
        let (status, message) = classify(rejection.channel, rejection.error);
        AppError::new(status, message)
    }
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
