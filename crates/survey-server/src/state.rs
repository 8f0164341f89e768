//! Shared router state.

use std::sync::Arc;

use survey_db::SurveyService;

/// Handle passed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SurveyService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: SurveyService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
