use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value had the wrong shape.
    #[error("failed to load survey config: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is unusable (e.g., a bad listen address).
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
