//! Signing secret and token lifetime.
//!
//! `JWT_SECRET` is required. There is no fallback value: a process that
//! cannot verify tokens must not start.
//!
//! - `JWT_SECRET`: HMAC key shared by every verification (required, non-empty)
//! - `JWT_ACCESS_EXPIRY`: lifetime in seconds of tokens minted by the
//!   developer CLI (default: 3600)

use std::env;
use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::ConfigError;

/// The process-wide HMAC key.
///
/// Cloning shares the same allocation. The value is never printed: `Debug`
/// is redacted and there is no `Display` or `Serialize`.
#[derive(Clone)]
pub struct SigningSecret(Arc<SecretString>);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret: String = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        Ok(Self(Arc::new(SecretString::from(secret))))
    }

    pub fn expose_bytes(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret([REDACTED])")
    }
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: SigningSecret,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: SigningSecret) -> Self {
        Self {
            secret,
            access_token_expiry: 3600,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        let secret = SigningSecret::new(secret)?;

        let access_token_expiry = match env::var("JWT_ACCESS_EXPIRY") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("JWT_ACCESS_EXPIRY"))?,
            Err(_) => 3600, // 1 hour
        };

        Ok(Self {
            secret,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_is_fatal() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let result = JwtConfig::from_env();
            assert_eq!(result.unwrap_err(), ConfigError::Missing("JWT_SECRET"));
        });
    }

    #[test]
    fn test_blank_secret_is_rejected() {
        temp_env::with_var("JWT_SECRET", Some("   "), || {
            let result = JwtConfig::from_env();
            assert_eq!(result.unwrap_err(), ConfigError::Invalid("JWT_SECRET"));
        });
    }

    #[test]
    fn test_from_env_reads_secret_and_expiry() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("marketplace-test-secret")),
                ("JWT_ACCESS_EXPIRY", Some("900")),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret.expose_bytes(), b"marketplace-test-secret");
                assert_eq!(config.access_token_expiry, 900);
            },
        );
    }

    #[test]
    fn test_default_expiry() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("marketplace-test-secret")),
                ("JWT_ACCESS_EXPIRY", None),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.access_token_expiry, 3600);
            },
        );
    }

    #[test]
    fn test_non_positive_expiry_is_rejected() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("marketplace-test-secret")),
                ("JWT_ACCESS_EXPIRY", Some("0")),
            ],
            || {
                let result = JwtConfig::from_env();
                assert_eq!(result.unwrap_err(), ConfigError::Invalid("JWT_ACCESS_EXPIRY"));
            },
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new(SigningSecret::new("do-not-print-me").unwrap());
        let printed = format!("{:?}", config);
        assert!(!printed.contains("do-not-print-me"));
        assert!(printed.contains("REDACTED"));
    }
}
