use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `srv` binary.
#[derive(Debug, Parser)]
#[command(name = "srv", version, about = "Survey builder API and client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// API base URL (defaults to `server.public_url`)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            server: self.server.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{QuestionCommands, SurveyCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "srv",
            "--format",
            "raw",
            "--server",
            "http://api:3000",
            "question",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.global_flags().server.as_deref(), Some("http://api:3000"));
        assert!(matches!(
            cli.command,
            Commands::Question {
                action: QuestionCommands::List
            }
        ));
    }

    #[test]
    fn question_create_collects_options_in_order() {
        let cli = Cli::try_parse_from([
            "srv", "question", "create", "--text", "Color?", "--type", "checkbox", "--option",
            "Red", "--option", "Blue",
        ])
        .expect("cli should parse");

        let Commands::Question {
            action: QuestionCommands::Create { text, kind, options },
        } = cli.command
        else {
            panic!("expected question create");
        };
        assert_eq!(text, "Color?");
        assert_eq!(kind.as_deref(), Some("checkbox"));
        assert_eq!(options, vec!["Red", "Blue"]);
    }

    #[test]
    fn survey_create_requires_title_or_json() {
        assert!(Cli::try_parse_from(["srv", "survey", "create"]).is_err());
        assert!(Cli::try_parse_from(["srv", "survey", "create", "--title", "T"]).is_ok());
        assert!(Cli::try_parse_from(["srv", "survey", "create", "--from-json", "s.json"]).is_ok());
    }

    #[test]
    fn from_json_conflicts_with_inline_fields() {
        let parsed = Cli::try_parse_from([
            "srv",
            "survey",
            "create",
            "--title",
            "T",
            "--from-json",
            "s.json",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn survey_get_takes_positional_id() {
        let cli = Cli::try_parse_from(["srv", "survey", "get", "srv-a3f8b2c1", "--verbose"])
            .expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Survey {
                action: SurveyCommands::Get { ref id }
            } if id == "srv-a3f8b2c1"
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["srv", "--format", "table", "question", "list"]);
        assert!(parsed.is_err());
    }
}
