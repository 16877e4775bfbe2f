//! Request-scoped identity.
//!
//! The gate binds an [`IdentityContext`] into the request's extensions after
//! a token verifies. The extensions live and die with the request, so an
//! identity never outlives it or leaks into another one.
//!
//! Handlers read the identity through [`UserIdentity`] or [`AdminIdentity`].
//! Both reject when the request was not authenticated on the matching
//! channel, so a handler can never observe an unverified subject id.

use axum::{
    extract::FromRequestParts,
    http::{Extensions, request::Parts},
};
use thiserror::Error;

use marketplace_auth::{AuthError, Channel, Claims};

use crate::middleware::classify::GateRejection;

/// The verified caller of the current request.
///
/// Only [`bind`] creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    subject: String,
    role: Option<String>,
    channel: Channel,
}

impl IdentityContext {
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Role tag. Always `None` for end users.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("request already carries a different identity")]
    AlreadyBound,
}

/// Attaches the identity carried by `claims` to `extensions`.
///
/// Binding the same identity twice returns the existing context. Binding a
/// different one fails and leaves the existing context in place.
pub fn bind(
    extensions: &mut Extensions,
    claims: Claims,
    channel: Channel,
) -> Result<IdentityContext, BindError> {
    let role = match channel {
        Channel::Header => claims.role,
        Channel::Cookie => None,
    };
    let identity = IdentityContext {
        subject: claims.sub,
        role,
        channel,
    };

    if let Some(existing) = extensions.get::<IdentityContext>() {
        if *existing == identity {
            return Ok(existing.clone());
        }
        return Err(BindError::AlreadyBound);
    }

    extensions.insert(identity.clone());
    Ok(identity)
}

fn bound_on(parts: &Parts, channel: Channel) -> Result<IdentityContext, GateRejection> {
    parts
        .extensions
        .get::<IdentityContext>()
        .filter(|identity| identity.channel == channel)
        .cloned()
        .ok_or(GateRejection::new(channel, AuthError::MissingCredential))
}

/// Identity of an end user authenticated through the `token` cookie.
#[derive(Debug, Clone)]
pub struct UserIdentity(pub IdentityContext);

impl<S> FromRequestParts<S> for UserIdentity
where
    S: Send + Sync,
{
    type Rejection = GateRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bound_on(parts, Channel::Cookie).map(UserIdentity)
    }
}

/// Identity of an administrative or seller actor authenticated through the
/// `Authorization` header.
#[derive(Debug, Clone)]
pub struct AdminIdentity(pub IdentityContext);

impl<S> FromRequestParts<S> for AdminIdentity
where
    S: Send + Sync,
{
    type Rejection = GateRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bound_on(parts, Channel::Header).map(AdminIdentity)
    }
}
