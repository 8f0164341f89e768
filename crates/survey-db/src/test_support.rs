//! Shared test utilities for survey-db tests.

pub(crate) mod helpers {
    use survey_core::entities::{NewQuestion, Question};

    use crate::service::SurveyService;

    /// Create an in-memory `SurveyService`.
    pub async fn test_service() -> SurveyService {
        SurveyService::new_local(":memory:").await.unwrap()
    }

    /// Create a multiple-choice question and return it.
    pub async fn seed_question(svc: &SurveyService, text: &str) -> Question {
        svc.create_question(&NewQuestion::new(text, "multiple-choice", ["Yes", "No"]))
            .await
            .unwrap()
    }
}
