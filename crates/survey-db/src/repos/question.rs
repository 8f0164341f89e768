//! Question bank repository: create, get, list, and batch lookup.

use std::collections::HashMap;

use chrono::Utc;

use survey_core::entities::{NewQuestion, Question};
use survey_core::enums::QuestionType;
use survey_core::ids::PREFIX_QUESTION;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_column, placeholders, to_json_column};
use crate::service::SurveyService;

const QUESTION_COLUMNS: &str = "id, question_text, question_type, options, created_at";

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get::<String>(0)?,
        question_text: row.get::<String>(1)?,
        question_type: row.get::<Option<String>>(2)?.map(QuestionType::from),
        options: parse_json_column(&row.get::<String>(3)?, "options")?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl SurveyService {
    /// Persist a question as submitted. No field is validated.
    pub async fn create_question(&self, new: &NewQuestion) -> Result<Question, DatabaseError> {
        let now = Utc::now();
        let options = to_json_column(&new.options)?;
        let question_type = new.question_type.as_ref().map(QuestionType::as_str);
        let conn = self.db().conn();

        let id = self
            .db()
            .insert_with_fresh_id(PREFIX_QUESTION, |id| {
                let params = libsql::params![
                    id,
                    new.question_text.as_str(),
                    question_type,
                    options.as_str(),
                    now.to_rfc3339()
                ];
                async move {
                    conn.execute(
                        "INSERT INTO questions (id, question_text, question_type, options, created_at)
                         VALUES (?1, ?2, ?3, ?4, ?5)",
                        params,
                    )
                    .await
                }
            })
            .await?;

        tracing::debug!(%id, "created question");

        Ok(Question {
            id,
            question_text: new.question_text.clone(),
            question_type: new.question_type.clone(),
            options: new.options.clone(),
            created_at: now,
        })
    }

    pub async fn get_question(&self, id: &str) -> Result<Question, DatabaseError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity_type: "Question",
            id: id.to_string(),
        })?;
        row_to_question(&row)
    }

    /// Every question in the bank, in insertion order.
    pub async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY rowid");
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row)?);
        }
        Ok(questions)
    }

    /// Fetch the questions with the given IDs in one query, keyed by ID.
    ///
    /// IDs with no stored question are simply absent from the map.
    pub async fn get_questions_by_ids(
        &self,
        ids: &[&str],
    ) -> Result<HashMap<String, Question>, DatabaseError> {
        let mut unique: Vec<&str> = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        if unique.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id IN ({})",
            placeholders(1, unique.len())
        );
        let params: Vec<libsql::Value> = unique.iter().map(|id| (*id).into()).collect();
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut found = HashMap::with_capacity(unique.len());
        while let Some(row) = rows.next().await? {
            let question = row_to_question(&row)?;
            found.insert(question.id.clone(), question);
        }
        Ok(found)
    }
}
