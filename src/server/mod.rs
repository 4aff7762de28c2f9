//! HTTP boundary: router, handlers, error mapping, and server lifecycle.
//!
//! The boundary is deliberately thin. It extracts and validates request
//! parameters, calls the [`ItemService`] facade, and maps outcomes onto
//! status codes; all item semantics live in the service, query, and
//! store layers.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::server::router::build_router;
use crate::service::ItemService;
use crate::store::fs::FileStore;

pub mod error;
pub mod handlers;
pub mod router;

/// Shared state handed to every handler.
pub struct AppState {
    pub service: ItemService<FileStore>,
}

/// Bind address configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("bind error: {0}")]
    Bind(String),

    #[error("serve error: {0}")]
    Serve(String),
}

/// Bind the configured address and serve requests until the process is
/// terminated.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "item API listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}
