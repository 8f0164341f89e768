use survey_config::SurveyConfig;
use survey_core::entities::NewQuestion;
use survey_core::enums::QuestionType;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::commands::dispatch::client;
use crate::output::output;

/// Handle `srv question`.
pub async fn handle(
    action: &QuestionCommands,
    config: &SurveyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = client(config, flags);
    match action {
        QuestionCommands::Create {
            text,
            kind,
            options,
        } => {
            let new = NewQuestion {
                question_text: text.clone(),
                question_type: kind.as_deref().map(QuestionType::from),
                options: options.clone(),
            };
            let question = client.create_question(&new).await?;
            output(&question, flags.format)
        }
        QuestionCommands::List => {
            let questions = client.list_questions().await?;
            output(&questions, flags.format)
        }
    }
}
