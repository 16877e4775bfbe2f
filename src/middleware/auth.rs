//! The request authentication gate.
//!
//! ```text
//! Unauthenticated -> (extract) -> TokenPresent -> (verify) -> Authenticated | Rejected(kind)
//! ```
//!
//! `Authenticated` binds an [`IdentityContext`] and hands the request to the
//! next handler. `Rejected` answers immediately with the classified
//! status/message; nothing downstream runs and nothing is retried.
//!
//! # Usage with axum::middleware::from_fn_with_state
//!
//! ```rust,ignore
//! use axum::{Router, middleware};
//! use crate::middleware::auth::require_user_token;
//!
//! let user_routes = Router::new()
//!     .route("/me", get(me))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_user_token));
//! ```
//!
//! [`IdentityContext`]: crate::middleware::identity::IdentityContext

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use marketplace_auth::{AuthError, Channel, Claims, TokenVerifier};
use marketplace_core::AppError;

use crate::middleware::classify::GateRejection;
use crate::middleware::extract::extract_token;
use crate::middleware::identity::bind;
use crate::state::AppState;

/// Extracts the token for `channel` and verifies it.
pub fn authenticate(
    headers: &HeaderMap,
    channel: Channel,
    verifier: &TokenVerifier,
) -> Result<Claims, AuthError> {
    let token = extract_token(headers, channel)?;
    verifier.verify(&token)
}

/// Gate for end-user routes. Reads only the `token` cookie.
pub async fn require_user_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(&state, req, next, Channel::Cookie).await
}

/// Gate for administrative and seller routes. Reads only `Authorization`.
pub async fn require_staff_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(&state, req, next, Channel::Header).await
}

async fn gate(
    state: &AppState,
    mut req: Request,
    next: Next,
    channel: Channel,
) -> Result<Response, AppError> {
    let claims = match authenticate(req.headers(), channel, &state.verifier) {
        Ok(claims) => claims,
        Err(error) => {
            tracing::warn!(
                channel = %channel,
                error = %error,
                path = %req.uri().path(),
                "request rejected by auth gate"
            );
            return Err(GateRejection::new(channel, error).into());
        }
    };

    let identity = bind(req.extensions_mut(), claims, channel).map_err(|e| {
        tracing::error!(channel = %channel, error = %e, "identity binding conflict");
        AppError::internal()
    })?;

    tracing::debug!(
        channel = %channel,
        subject = %identity.subject(),
        "request authenticated"
    );

    Ok(next.run(req).await)
}
