//! Token verification and signing.
//!
//! Tokens are HS256 JWTs signed with the process [`SigningSecret`]. The
//! algorithm is pinned: a token whose header names anything else is
//! rejected before its signature is looked at.
//!
//! [`TokenVerifier::verify_at`] is a pure function of the token, the secret
//! and the supplied time. It performs no I/O and holds no mutable state, so a
//! single verifier is shared by every request without locking.
//!
//! # Example
//!
//! ```ignore
//! let verifier = TokenVerifier::new(&jwt_config);
//!
//! match verifier.verify(token) {
//!     Ok(claims) => println!("subject: {}", claims.sub),
//!     Err(AuthError::Expired) => println!("ask the client to log in again"),
//!     Err(other) => println!("reject: {other}"),
//! }
//! ```
//!
//! [`SigningSecret`]: marketplace_config::SigningSecret

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use marketplace_config::JwtConfig;

use crate::claims::Claims;
use crate::error::{AuthError, SigningError};

/// The only algorithm tokens may be signed with.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked in `verify_at` against the caller's clock so that
        // signature failures always win over expiry.
        validation.validate_exp = false;
        validation.leeway = 0;
        // `aud` and `iss` are accepted but never checked.
        validation.validate_aud = false;
        // `exp` presence is enforced by `Claims` deserialization, which also
        // accepts negative and fractional values so they classify as expiry.
        validation.set_required_spec_claims(&["sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(jwt_config.secret.expose_bytes()),
            validation,
        }
    }

    /// Verifies `token` against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies `token` as of `now` (seconds since epoch).
    ///
    /// Order of checks: structure, algorithm, signature, required claims,
    /// expiry. A token is expired when `exp < now`; there is no leeway.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, AuthError> {
        if token.is_empty() {
            return Err(AuthError::Malformed);
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.sub.trim().is_empty() {
            return Err(AuthError::Malformed);
        }
        if claims.exp < now {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }
}

/// Signs a token for `subject` valid for `jwt_config.access_token_expiry`
/// seconds from now.
///
/// This is not a login flow: callers are responsible for knowing who
/// `subject` is. Used by the developer CLI and by tests.
pub fn create_token(
    subject: &str,
    role: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<String, SigningError> {
    create_token_at(
        subject,
        role,
        Utc::now().timestamp(),
        jwt_config.access_token_expiry,
        jwt_config,
    )
}

/// Signs a token issued at `issued_at` that expires `expires_in` seconds
/// later. A negative `expires_in` yields an already-expired token.
pub fn create_token_at(
    subject: &str,
    role: Option<&str>,
    issued_at: i64,
    expires_in: i64,
    jwt_config: &JwtConfig,
) -> Result<String, SigningError> {
    let expires_at = issued_at
        .checked_add(expires_in)
        .ok_or(SigningError::ExpiryOutOfRange)?;
    let claims = Claims::new(subject, role, issued_at, expires_at);

    let token = encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.expose_bytes()),
    )?;

    Ok(token)
}
