//! Token extraction.
//!
//! Each channel reads exactly one place in the request. The cookie channel
//! never looks at `Authorization`, even when the cookie is absent and the
//! header is present: end-user tokens are only trusted from storage that
//! page scripts cannot read.

use axum::http::{HeaderMap, header};
use axum_extra::extract::CookieJar;

use marketplace_auth::{AuthError, Channel, TOKEN_COOKIE};

/// Pulls the raw token for `channel` out of `headers`.
///
/// Empty values count as missing.
pub fn extract_token(headers: &HeaderMap, channel: Channel) -> Result<String, AuthError> {
    let token = match channel {
        Channel::Header => from_authorization_header(headers),
        Channel::Cookie => from_token_cookie(headers),
    };

    token
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingCredential)
}

// The whole header value is the token; no scheme prefix is stripped.
fn from_authorization_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn from_token_cookie(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
}
