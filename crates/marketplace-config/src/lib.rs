//! # Marketplace Config
//!
//! Configuration types loaded from environment variables:
//!
//! - [`jwt`]: the signing secret and token lifetime
//! - [`cors`]: allowed browser origins
//! - [`server`]: listen address
//!
//! Every value is read once at startup. A missing signing secret is a
//! [`ConfigError`], and the binary refuses to start on it.
//!
//! # Example
//!
//! ```ignore
//! use marketplace_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod cors;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use error::ConfigError;
pub use jwt::{JwtConfig, SigningSecret};
pub use server::ServerConfig;
