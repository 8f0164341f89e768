use std::net::SocketAddr;

use anyhow::Context;
use survey_config::SurveyConfig;
use survey_db::SurveyService;
use survey_server::AppState;

use crate::cli::root_commands::ServeArgs;

/// Handle `srv serve`.
pub async fn handle(args: &ServeArgs, config: &SurveyConfig) -> anyhow::Result<()> {
    let mut database = config.database.clone();
    if let Some(path) = &args.db {
        database.path.clone_from(path);
        database.url.clear();
        database.auth_token.clear();
    }

    let addr: SocketAddr = match &args.bind {
        Some(bind) => bind
            .parse()
            .with_context(|| format!("invalid --bind address '{bind}'"))?,
        None => config.server.socket_addr()?,
    };

    let service = SurveyService::open(&database)
        .await
        .context("failed to open survey database")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    survey_server::serve(listener, AppState::new(service), survey_server::shutdown_signal())
        .await
        .context("server terminated with an error")
}
