use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use survey_core::entities::{NewQuestion, NewSurvey, PopulatedSurvey, Question, Survey};

use crate::error::ClientError;

/// Async client for one survey API instance.
#[derive(Debug, Clone)]
pub struct SurveyClient {
    http: reqwest::Client,
    base_url: String,
}

impl SurveyClient {
    /// Client for the API rooted at `base_url` (e.g., `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Client reusing an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /api/questions`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` on a non-2xx response, `ClientError::Http`
    /// on transport or decoding failure.
    pub async fn create_question(&self, new: &NewQuestion) -> Result<Question, ClientError> {
        let response = self
            .http
            .post(self.url("/api/questions"))
            .json(new)
            .send()
            .await?;
        let question: Question = decode(response).await?;
        tracing::debug!(id = %question.id, "question created");
        Ok(question)
    }

    /// `GET /api/questions`
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_question`].
    pub async fn list_questions(&self) -> Result<Vec<Question>, ClientError> {
        let response = self.http.get(self.url("/api/questions")).send().await?;
        decode(response).await
    }

    /// `POST /api/surveys`
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_question`].
    pub async fn create_survey(&self, new: &NewSurvey) -> Result<Survey, ClientError> {
        let response = self
            .http
            .post(self.url("/api/surveys"))
            .json(new)
            .send()
            .await?;
        let survey: Survey = decode(response).await?;
        tracing::debug!(id = %survey.id, link = %survey.link, "survey created");
        Ok(survey)
    }

    /// `GET /api/surveys/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` on 404, otherwise as
    /// [`Self::create_question`].
    pub async fn get_survey(&self, id: &str) -> Result<PopulatedSurvey, ClientError> {
        let path = format!("/api/surveys/{}", urlencoding::encode(id));
        let response = self.http.get(self.url(&path)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id.to_string()));
        }
        let survey: PopulatedSurvey = decode(response).await?;
        tracing::debug!(%id, entries = survey.questions.len(), "survey fetched");
        Ok(survey)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status,
        message: error_message(&body),
    })
}

/// Pull the human-readable message out of an error body.
///
/// The API uses `{"error": ...}` for failures and `{"message": ...}` for
/// not-found; anything else is returned as-is.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .into_iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(String::from))
        })
        .unwrap_or_else(|| body.to_string())
}
