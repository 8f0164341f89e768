use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Question;

/// Display rule attached to a survey entry.
///
/// Reads as "show this entry only if the answer to question `field` equals
/// `value`". The rule is stored and returned as-is; nothing evaluates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Condition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One ordered entry of a survey.
///
/// `Q` is the question reference: a bare ID when stored, the resolved
/// `Option<Question>` once populated (`None` when the ID does not resolve).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SurveyQuestion<Q = String> {
    pub question: Q,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl SurveyQuestion {
    /// Unconditional entry referencing `question_id`.
    pub fn new(question_id: impl Into<String>) -> Self {
        Self {
            question: question_id.into(),
            condition: None,
        }
    }

    /// Entry shown only when question `field` was answered with `value`.
    pub fn when(
        question_id: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            question: question_id.into(),
            condition: Some(Condition {
                field: Some(field.into()),
                value: Some(value.into()),
            }),
        }
    }
}

/// An ordered composition of questions with a shareable link.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Survey<Q = String> {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<SurveyQuestion<Q>>,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

/// A survey whose question references have been resolved.
pub type PopulatedSurvey = Survey<Option<Question>>;

impl Survey {
    /// Question IDs referenced by the entries, in entry order.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|entry| entry.question.as_str())
    }

    /// Resolve every entry's question reference through `resolve`.
    ///
    /// Entries keep their position; unresolved references become `None`.
    /// Condition fields stay as bare IDs.
    #[must_use]
    pub fn populate<F>(self, mut resolve: F) -> PopulatedSurvey
    where
        F: FnMut(&str) -> Option<Question>,
    {
        Survey {
            questions: self
                .questions
                .into_iter()
                .map(|entry| SurveyQuestion {
                    question: resolve(&entry.question),
                    condition: entry.condition,
                })
                .collect(),
            id: self.id,
            title: self.title,
            description: self.description,
            link: self.link,
            created_at: self.created_at,
        }
    }
}

/// Payload accepted by survey creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct NewSurvey {
    pub title: String,
    pub description: String,
    pub questions: Vec<SurveyQuestion>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::QuestionType;

    fn question(id: &str, text: &str) -> Question {
        Question {
            id: id.into(),
            question_text: text.into(),
            question_type: Some(QuestionType::Feedback),
            options: vec![],
            created_at: Utc::now(),
        }
    }

    fn survey(entries: Vec<SurveyQuestion>) -> Survey {
        Survey {
            id: "srv-00000001".into(),
            title: "T".into(),
            description: "D".into(),
            questions: entries,
            link: "/survey/srv-00000001".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn populate_keeps_order_and_marks_unresolved() {
        let known = question("qst-00000001", "Color?");
        let s = survey(vec![
            SurveyQuestion::new("qst-00000009"),
            SurveyQuestion::when("qst-00000001", "qst-00000009", "yes"),
        ]);

        let populated = s.populate(|id| (id == known.id).then(|| known.clone()));

        assert_eq!(populated.questions.len(), 2);
        assert_eq!(populated.questions[0].question, None);
        assert_eq!(populated.questions[1].question.as_ref(), Some(&known));
        assert_eq!(
            populated.questions[1].condition,
            Some(Condition {
                field: Some("qst-00000009".into()),
                value: Some("yes".into()),
            })
        );
    }

    #[test]
    fn question_ids_follow_entry_order() {
        let s = survey(vec![
            SurveyQuestion::new("qst-00000002"),
            SurveyQuestion::new("qst-00000001"),
        ]);
        assert_eq!(
            s.question_ids().collect::<Vec<_>>(),
            vec!["qst-00000002", "qst-00000001"]
        );
    }

    #[test]
    fn new_survey_accepts_missing_fields() {
        let payload: NewSurvey = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert_eq!(payload.title, "T");
        assert!(payload.description.is_empty());
        assert!(payload.questions.is_empty());
    }

    #[test]
    fn entry_without_condition_omits_it_on_the_wire() {
        let json = serde_json::to_value(SurveyQuestion::new("qst-00000001")).unwrap();
        assert_eq!(json, serde_json::json!({ "question": "qst-00000001" }));
    }

    #[test]
    fn populated_unresolved_entry_serializes_null() {
        let populated = survey(vec![SurveyQuestion::new("qst-00000009")]).populate(|_| None);
        let json = serde_json::to_value(&populated).unwrap();
        assert_eq!(json["questions"][0]["question"], serde_json::Value::Null);
        assert_eq!(json["_id"], "srv-00000001");
    }
}
