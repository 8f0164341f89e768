//! Cross-cutting error types for the survey builder.
//!
//! Domain-specific errors (`DatabaseError`, `ApiError`, `ClientError`) live in
//! their respective crates. A unified error is deferred to `survey-cli` where
//! all crate errors converge into `anyhow`.

use thiserror::Error;

/// Input rejected before it reaches storage.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (id format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
