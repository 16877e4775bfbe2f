use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::ConfigError;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host: IpAddr = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HOST"))?;

        let port: u16 = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 3000,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        temp_env::with_vars_unset(["HOST", "PORT"], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.addr.to_string(), "0.0.0.0:3000");
        });
    }

    #[test]
    fn test_server_custom_port() {
        temp_env::with_vars([("HOST", Some("127.0.0.1")), ("PORT", Some("8080"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
        });
    }

    #[test]
    fn test_server_invalid_port() {
        temp_env::with_vars([("HOST", None), ("PORT", Some("eighty"))], || {
            let result = ServerConfig::from_env();
            assert_eq!(result.unwrap_err(), ConfigError::Invalid("PORT"));
        });
    }
}
