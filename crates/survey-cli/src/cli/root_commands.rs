use clap::{Args, Subcommand};

use crate::cli::subcommands::{QuestionCommands, SurveyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the survey API.
    Serve(ServeArgs),
    /// Question bank.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Surveys.
    Survey {
        #[command(subcommand)]
        action: SurveyCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address (overrides `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,
    /// Database file (overrides `database.path`)
    #[arg(long)]
    pub db: Option<String>,
}
