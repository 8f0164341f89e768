//! Row-to-entity parsing helpers.
//!
//! Repos convert `libsql::Row` (column-indexed) into typed entity structs.
//! These helpers isolate the parsing logic and handle the dual datetime format
//! (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a JSON TEXT column into `T`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` naming `column` if the JSON is invalid or
/// does not match `T`.
pub fn parse_json_column<T: DeserializeOwned>(s: &str, column: &str) -> Result<T, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column '{column}': {e}")))
}

/// Serialize `value` for a JSON TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn to_json_column<T: serde::Serialize>(value: &T) -> Result<String, DatabaseError> {
    serde_json::to_string(value).map_err(|e| DatabaseError::Other(e.into()))
}

/// Build `?start, ?start+1, ...` for `count` positional parameters.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_sqlite_formats() {
        let a = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let b = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn json_column_error_names_column() {
        let err = parse_json_column::<Vec<String>>("{", "options").unwrap_err();
        assert!(err.to_string().contains("'options'"), "{err}");
    }

    #[test]
    fn placeholder_list() {
        assert_eq!(placeholders(1, 3), "?1, ?2, ?3");
        assert_eq!(placeholders(2, 1), "?2");
        assert_eq!(placeholders(1, 0), "");
    }
}
