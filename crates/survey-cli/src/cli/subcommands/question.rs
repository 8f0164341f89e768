use clap::Subcommand;

/// Question bank commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// Create a question.
    Create {
        #[arg(long)]
        text: String,
        /// multiple-choice, checkbox, feedback (other values are stored as-is)
        #[arg(long = "type")]
        kind: Option<String>,
        /// Answer choice; repeat for each option
        #[arg(long = "option")]
        options: Vec<String>,
    },
    /// List every question.
    List,
}
