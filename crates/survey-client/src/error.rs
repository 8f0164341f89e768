//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested survey does not exist.
    #[error("survey not found: {0}")]
    NotFound(String),

    /// The API answered with a failure status.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}
