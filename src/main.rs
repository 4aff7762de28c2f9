use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wares::server::{start_server, AppState, ServerConfig};
use wares::service::ItemService;
use wares::store::fs::FileStore;
use wares::store::ItemStore;

mod args;
use args::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let cli = Cli::parse();

    // Startup failures here are fatal: an unreadable or unparsable
    // backing file must keep the process from serving at all.
    let store = FileStore::open(&cli.data)?;
    info!(
        path = %cli.data.display(),
        items = store.find_all()?.len(),
        "item store opened"
    );

    let state = Arc::new(AppState {
        service: ItemService::new(store),
    });

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
    };
    start_server(&config, state).await?;

    Ok(())
}
