use std::path::PathBuf;

use clap::Subcommand;

/// Survey commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SurveyCommands {
    /// Create a survey.
    Create {
        #[arg(long, required_unless_present = "from_json")]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Entry as `QUESTION_ID` or `QUESTION_ID@FIELD_ID=VALUE`; repeat in order
        #[arg(long = "question")]
        questions: Vec<String>,
        /// Read the whole survey payload from a JSON file instead
        #[arg(long, conflicts_with_all = ["title", "description", "questions"])]
        from_json: Option<PathBuf>,
    },
    /// Get a survey with its questions populated.
    Get { id: String },
}
