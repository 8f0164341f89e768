use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("srv error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let is_serve = matches!(cli.command, cli::Commands::Serve(_));
    init_tracing(cli.quiet, cli.verbose, is_serve)?;

    let config = bootstrap::load_config().context("failed to load configuration")?;
    let flags = cli.global_flags();

    commands::dispatch::dispatch(cli.command, &config, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool, serving: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else if serving {
        "info"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SURVEY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
