//! # Marketplace Auth
//!
//! Credential handling for the Marketplace request gate.
//!
//! - [`channel`]: the two transports a token may arrive on
//! - [`claims`]: the verified token payload
//! - [`error`]: the failure taxonomy the gate branches on
//! - [`jwt`]: [`TokenVerifier`] and the token signing helper
//!
//! Nothing here touches HTTP types. Extraction from a request and the
//! mapping of failures to responses live in the server crate.
//!
//! # Example
//!
//! ```ignore
//! use marketplace_auth::{TokenVerifier, create_token};
//! use marketplace_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let verifier = TokenVerifier::new(&config);
//!
//! let token = create_token("u1", None, &config)?;
//! let claims = verifier.verify(&token)?;
//! assert_eq!(claims.sub, "u1");
//! ```

pub mod channel;
pub mod claims;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use channel::{Channel, TOKEN_COOKIE};
pub use claims::{Claims, roles};
pub use error::{AuthError, SigningError};
pub use jwt::{ALGORITHM, TokenVerifier, create_token, create_token_at};
