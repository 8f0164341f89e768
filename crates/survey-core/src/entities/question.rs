use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QuestionType;

/// A reusable prompt in the question bank.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub question_type: Option<QuestionType>,
    pub options: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted by question creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NewQuestion {
    pub question_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub question_type: Option<QuestionType>,
    pub options: Vec<String>,
}

impl NewQuestion {
    /// Build a payload with all three fields set.
    pub fn new(
        question_text: impl Into<String>,
        question_type: impl Into<QuestionType>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            question_text: question_text.into(),
            question_type: Some(question_type.into()),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}
