use survey_config::SurveyConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &SurveyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Question { action } => commands::question::handle(&action, config, flags).await,
        Commands::Survey { action } => commands::survey::handle(&action, config, flags).await,
    }
}

/// API client for the `--server` flag, falling back to `server.public_url`.
pub fn client(config: &SurveyConfig, flags: &GlobalFlags) -> survey_client::SurveyClient {
    let base_url = flags
        .server
        .clone()
        .unwrap_or_else(|| config.server.public_url.clone());
    tracing::debug!(%base_url, "using survey API");
    survey_client::SurveyClient::new(base_url)
}
