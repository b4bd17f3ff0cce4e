use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use joke_api::utils::logger;
use joke_api::{server, AppContext, CliConfig, JsonFileJokes};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting joke-api");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Server config: {:?}", config);

    let jokes = JsonFileJokes::from_file(&config.jokes_file)
        .with_context(|| format!("loading jokes from {}", config.jokes_file.display()))?;
    let ctx = Arc::new(AppContext::new(Arc::new(jokes), config.prefix.clone()));

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("binding {}", config.socket_addr()))?;

    tokio::select! {
        result = server::run(listener, ctx) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Shutting down"),
    }

    Ok(())
}
