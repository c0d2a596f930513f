//! Riskbook server binary.

use std::process;
use std::sync::Arc;

use clap::Parser;
use riskbook::cli::Cli;
use riskbook::config::ServerConfig;
use riskbook::storage::MemoryStore;
use riskbook::{Error, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let config = ServerConfig::from_cli(cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("RISKBOOK_GIT_COMMIT"),
        built = env!("RISKBOOK_BUILD_TIMESTAMP"),
        "starting riskbook"
    );

    let store = Arc::new(MemoryStore::new());
    server::serve(&config, store).await
}
