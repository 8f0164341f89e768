//! Question types.
//!
//! The store keeps `questionType` as free text and never validates it, so the
//! enum carries a catch-all `Other` variant that round-trips unknown values
//! verbatim. Serialization goes through `String` in both directions.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// QuestionType
// ---------------------------------------------------------------------------

/// Kind of answer a question expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    /// Pick exactly one of `options`.
    MultipleChoice,
    /// Pick any subset of `options`.
    Checkbox,
    /// Free-form text answer; `options` is ignored.
    Feedback,
    /// Any other value, kept as submitted.
    Other(String),
}

impl QuestionType {
    /// Return the string representation used on the wire and in SQL storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Checkbox => "checkbox",
            Self::Feedback => "feedback",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for QuestionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "multiple-choice" => Self::MultipleChoice,
            "checkbox" => Self::Checkbox,
            "feedback" => Self::Feedback,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for QuestionType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        match kind {
            QuestionType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
