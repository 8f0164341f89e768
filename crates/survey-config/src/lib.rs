//! # survey-config
//!
//! Layered configuration loading for the survey builder using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SURVEY_*` prefix, `__` as separator)
//! 2. Project-level `.survey/config.toml`
//! 3. User-level `~/.config/survey/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SURVEY_DATABASE__AUTH_TOKEN` -> `database.auth_token`,
//! `SURVEY_SERVER__BIND` -> `server.bind`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use survey_config::SurveyConfig;
//!
//! let config = SurveyConfig::load_with_dotenv().expect("config");
//! if config.database.is_remote() {
//!     println!("remote database: {}", config.database.url);
//! }
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "SURVEY_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl SurveyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".survey/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("survey").join("config.toml"))
    }
}
