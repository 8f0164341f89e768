//! HTTP server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_public_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the API listens on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Base URL clients use to reach the API.
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            public_url: default_public_url(),
        }
    }
}

impl ServerConfig {
    /// Parse `bind` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `bind` is not `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.bind".into(),
                reason: format!("'{}': {e}", self.bind),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:3000");
        assert_eq!(config.public_url, "http://127.0.0.1:3000");
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn invalid_bind_is_reported() {
        let config = ServerConfig {
            bind: "localhost".into(),
            ..Default::default()
        };
        let err = config.socket_addr().expect_err("should reject");
        assert!(err.to_string().contains("server.bind"), "{err}");
    }
}
