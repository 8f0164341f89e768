//! Survey repository: single-statement create, raw and populated reads.
//!
//! The survey ID is chosen before the insert, so the shareable link is
//! written together with the rest of the row. Question references are checked
//! for ID format only; a well-formed reference to a missing question is
//! accepted and resolves to `None` when populated.

use chrono::Utc;

use survey_core::entities::{NewSurvey, PopulatedSurvey, Survey, SurveyQuestion};
use survey_core::ids::{PREFIX_QUESTION, PREFIX_SURVEY, survey_link, validate_id};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_column, to_json_column};
use crate::service::SurveyService;

fn row_to_survey(row: &libsql::Row) -> Result<Survey, DatabaseError> {
    Ok(Survey {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        description: row.get::<String>(2)?,
        questions: parse_json_column(&row.get::<String>(3)?, "questions")?,
        link: row.get::<String>(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

/// Reject entries whose question or condition references are not question IDs.
fn validate_entries(entries: &[SurveyQuestion]) -> Result<(), DatabaseError> {
    for entry in entries {
        validate_id(PREFIX_QUESTION, &entry.question)?;
        if let Some(field) = entry.condition.as_ref().and_then(|c| c.field.as_deref()) {
            validate_id(PREFIX_QUESTION, field)?;
        }
    }
    Ok(())
}

impl SurveyService {
    /// Persist a survey with its final link in one insert, then read it back.
    pub async fn create_survey(&self, new: &NewSurvey) -> Result<Survey, DatabaseError> {
        validate_entries(&new.questions)?;

        let now = Utc::now();
        let questions = to_json_column(&new.questions)?;
        let conn = self.db().conn();

        let id = self
            .db()
            .insert_with_fresh_id(PREFIX_SURVEY, |id| {
                let link = survey_link(&id);
                let params = libsql::params![
                    id,
                    new.title.as_str(),
                    new.description.as_str(),
                    questions.as_str(),
                    link,
                    now.to_rfc3339()
                ];
                async move {
                    conn.execute(
                        "INSERT INTO surveys (id, title, description, questions, link, created_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                        params,
                    )
                    .await
                }
            })
            .await?;

        tracing::debug!(%id, entries = new.questions.len(), "created survey");

        self.get_survey_raw(&id).await
    }

    /// Look up a survey with its question references left as IDs.
    pub async fn get_survey_raw(&self, id: &str) -> Result<Survey, DatabaseError> {
        validate_id(PREFIX_SURVEY, id)?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, title, description, questions, link, created_at
                 FROM surveys WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity_type: "Survey",
            id: id.to_string(),
        })?;
        row_to_survey(&row)
    }

    /// Look up a survey and resolve every entry's question into the full
    /// document with a single batch fetch.
    pub async fn get_survey(&self, id: &str) -> Result<PopulatedSurvey, DatabaseError> {
        let survey = self.get_survey_raw(id).await?;
        let ids: Vec<&str> = survey.question_ids().collect();
        let found = self.get_questions_by_ids(&ids).await?;

        let unresolved = ids.iter().filter(|qid| !found.contains_key(**qid)).count();
        if unresolved > 0 {
            tracing::debug!(%id, unresolved, "survey references missing questions");
        }

        Ok(survey.populate(|qid| found.get(qid).cloned()))
    }
}
