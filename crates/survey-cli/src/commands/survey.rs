use std::path::Path;

use anyhow::{Context, bail};
use survey_client::ClientError;
use survey_config::SurveyConfig;
use survey_core::entities::{NewSurvey, SurveyQuestion};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SurveyCommands;
use crate::commands::dispatch::client;
use crate::output::output;

/// Handle `srv survey`.
pub async fn handle(
    action: &SurveyCommands,
    config: &SurveyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = client(config, flags);
    match action {
        SurveyCommands::Create {
            title,
            description,
            questions,
            from_json,
        } => {
            let new = match from_json {
                Some(path) => read_payload(path)?,
                None => NewSurvey {
                    title: title.clone().unwrap_or_default(),
                    description: description.clone().unwrap_or_default(),
                    questions: questions
                        .iter()
                        .map(String::as_str)
                        .map(parse_entry)
                        .collect::<anyhow::Result<_>>()?,
                },
            };
            let survey = client.create_survey(&new).await?;
            output(&survey, flags.format)
        }
        SurveyCommands::Get { id } => match client.get_survey(id).await {
            Ok(survey) => output(&survey, flags.format),
            Err(ClientError::NotFound(id)) => bail!("survey '{id}' not found"),
            Err(error) => Err(error.into()),
        },
    }
}

fn read_payload(path: &Path) -> anyhow::Result<NewSurvey> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid survey JSON in {}", path.display()))
}

/// Parse `QUESTION_ID` or `QUESTION_ID@FIELD_ID=VALUE` into a survey entry.
fn parse_entry(raw: &str) -> anyhow::Result<SurveyQuestion> {
    let Some((question, condition)) = raw.split_once('@') else {
        if raw.is_empty() {
            bail!("empty --question value");
        }
        return Ok(SurveyQuestion::new(raw));
    };
    let Some((field, value)) = condition.split_once('=') else {
        bail!("condition '{condition}' must be FIELD_ID=VALUE");
    };
    if question.is_empty() || field.is_empty() {
        bail!("invalid --question value '{raw}'");
    }
    Ok(SurveyQuestion::when(question, field, value))
}
