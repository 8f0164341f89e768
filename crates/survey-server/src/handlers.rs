//! Request handlers, one per route.
//!
//! Bodies are taken as `Result<Json<_>, JsonRejection>` so that malformed JSON
//! is reported like any other failure (500) instead of axum's 4xx defaults.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use survey_core::entities::{NewQuestion, NewSurvey, PopulatedSurvey, Question, Survey};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/questions`
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    let Json(new) = payload?;
    let question = state.service.create_question(&new).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// `GET /api/questions`
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, ApiError> {
    Ok(Json(state.service.list_questions().await?))
}

/// `POST /api/surveys`
pub async fn create_survey(
    State(state): State<AppState>,
    payload: Result<Json<NewSurvey>, JsonRejection>,
) -> Result<(StatusCode, Json<Survey>), ApiError> {
    let Json(new) = payload?;
    let survey = state.service.create_survey(&new).await?;
    Ok((StatusCode::CREATED, Json(survey)))
}

/// `GET /api/surveys/{id}`
pub async fn get_survey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PopulatedSurvey>, ApiError> {
    match state.service.get_survey(&id).await {
        Ok(survey) => Ok(Json(survey)),
        Err(error) if error.is_not_found() => Err(ApiError::SurveyNotFound),
        Err(error) => Err(error.into()),
    }
}
