use std::env;

/// Origins allowed to call the API from a browser.
///
/// End users authenticate with a cookie, so the CORS layer built from this
/// config must allow credentials and can therefore never use a wildcard.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:5174".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "*")
            .collect();

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_defaults() {
        temp_env::with_var_unset("ALLOWED_ORIGINS", || {
            let config = CorsConfig::from_env();
            assert_eq!(
                config.allowed_origins,
                vec!["http://localhost:5173", "http://localhost:5174"]
            );
        });
    }

    #[test]
    fn test_cors_trims_and_drops_wildcard() {
        temp_env::with_var(
            "ALLOWED_ORIGINS",
            Some(" https://shop.example.com , *, ,https://admin.example.com"),
            || {
                let config = CorsConfig::from_env();
                assert_eq!(
                    config.allowed_origins,
                    vec!["https://shop.example.com", "https://admin.example.com"]
                );
            },
        );
    }
}
