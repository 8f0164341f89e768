//! ID prefixes, format validation, and shareable link formatting.
//!
//! IDs are `{prefix}-{8 lowercase hex}` (e.g., `qst-a3f8b2c1`). They are
//! generated before insert so a survey's link is known at write time.

use crate::errors::CoreError;

pub const PREFIX_QUESTION: &str = "qst";
pub const PREFIX_SURVEY: &str = "srv";

/// Every prefix handed out by the store.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_QUESTION, PREFIX_SURVEY];

/// Number of hex characters after the dash.
pub const ID_HEX_LEN: usize = 8;

/// Path prefix of a survey's shareable link.
pub const SURVEY_LINK_PREFIX: &str = "/survey/";

/// Check whether `id` is a well-formed ID for `prefix`.
#[must_use]
pub fn is_valid_id(prefix: &str, id: &str) -> bool {
    let Some(rest) = id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
    else {
        return false;
    };
    rest.len() == ID_HEX_LEN
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Validate an ID, naming the offending value on failure.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `id` is not a well-formed `prefix` ID.
pub fn validate_id(prefix: &str, id: &str) -> Result<(), CoreError> {
    if is_valid_id(prefix, id) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "malformed {prefix} id \"{id}\" (expected {prefix}-<{ID_HEX_LEN} hex chars>)"
        )))
    }
}

/// Shareable relative link of a survey: `/survey/<id>`.
#[must_use]
pub fn survey_link(survey_id: &str) -> String {
    format!("{SURVEY_LINK_PREFIX}{survey_id}")
}
