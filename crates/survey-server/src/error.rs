//! Mapping of failures onto HTTP responses.
//!
//! Two outcomes only: a missing survey is `404 {"message": "Survey not found"}`,
//! anything else is `500 {"error": <message>}` with the message passed through.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use survey_db::error::DatabaseError;
use thiserror::Error;

pub const SURVEY_NOT_FOUND: &str = "Survey not found";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Survey lookup by a well-formed ID found nothing.
    #[error("Survey not found")]
    SurveyNotFound,

    /// Store or validation failure.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Request body was not the expected JSON.
    #[error("{0}")]
    Payload(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Payload(rejection.body_text())
    }
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::SurveyNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Payload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::SurveyNotFound => json!({ "message": SURVEY_NOT_FOUND }),
            other => {
                tracing::error!(error = %other, "request failed");
                json!({ "error": other.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
