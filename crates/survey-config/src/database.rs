//! libSQL database configuration.
//!
//! Credentials for a remote database come only from config files or
//! `SURVEY_DATABASE__*` environment variables.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "survey.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://surveys-acme.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a remote database is configured (URL and token both set).
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "survey.db");
        assert!(!config.is_remote());
    }

    #[test]
    fn remote_needs_url_and_token() {
        let mut config = DatabaseConfig {
            url: "libsql://surveys-acme.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());

        config.auth_token = "token123".into();
        assert!(config.is_remote());
    }
}
