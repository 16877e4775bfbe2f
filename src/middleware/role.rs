//! Role checks for header-channel routes.
//!
//! Admins and sellers share the header channel and differ only by the
//! `role` claim. These layers must sit inside
//! [`require_staff_token`](crate::middleware::auth::require_staff_token) so
//! that an identity is already bound when they run:
//!
//! ```rust,ignore
//! init_admin_router()
//!     .route_layer(middleware::from_fn(require_admin_role))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_staff_token))
//! ```

use axum::{extract::Request, middleware::Next, response::Response};

use marketplace_auth::{AuthError, Channel, roles};
use marketplace_core::AppError;

use crate::middleware::classify::GateRejection;
use crate::middleware::identity::IdentityContext;

pub const NOT_AUTHORIZED: &str = "Not Authorized";

pub async fn require_admin_role(req: Request, next: Next) -> Result<Response, AppError> {
    require_role(req, next, roles::ADMIN).await
}

pub async fn require_seller_role(req: Request, next: Next) -> Result<Response, AppError> {
    require_role(req, next, roles::SELLER).await
}

async fn require_role(req: Request, next: Next, role: &'static str) -> Result<Response, AppError> {
    check_role(req.extensions().get::<IdentityContext>(), role)?;
    Ok(next.run(req).await)
}

/// Checks that a header-channel identity carries `role`.
pub fn check_role(identity: Option<&IdentityContext>, role: &str) -> Result<(), AppError> {
    let identity = identity
        .filter(|identity| identity.channel() == Channel::Header)
        .ok_or(GateRejection::new(Channel::Header, AuthError::MissingCredential))?;

    if identity.role() != Some(role) {
        tracing::warn!(
            subject = %identity.subject(),
            required = role,
            actual = identity.role().unwrap_or("none"),
            "role check failed"
        );
        return Err(AppError::forbidden(NOT_AUTHORIZED));
    }

    Ok(())
}
