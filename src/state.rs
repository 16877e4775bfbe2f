use std::sync::Arc;

use marketplace_auth::TokenVerifier;
use marketplace_config::{ConfigError, CorsConfig, JwtConfig};

/// Shared, read-only application state.
///
/// The verifier holds the signing key derived from the startup secret and is
/// never mutated, so requests read it concurrently without locking.
#[derive(Clone, Debug)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(jwt_config: &JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            verifier: Arc::new(TokenVerifier::new(jwt_config)),
            cors_config,
        }
    }
}

pub fn init_app_state() -> Result<AppState, ConfigError> {
    let jwt_config = JwtConfig::from_env()?;
    Ok(AppState::new(&jwt_config, CorsConfig::from_env()))
}
