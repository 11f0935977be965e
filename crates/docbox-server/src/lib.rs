//! HTTP API for the docbox document library.
//!
//! This crate exposes a [`Library`] over HTTP using axum:
//! - `GET /api/document?path=<p>`: raw markdown
//! - `GET /api/document/html?path=<p>`: rendered HTML
//! - `GET /api/title?path=<p>`: breadcrumb title
//! - `GET /api/search?key=<k>`: matching document paths
//! - `POST /api/hooks/sync`: pull the repository and invalidate caches
//!
//! Every response body is a JSON envelope `{ "code", "msg", "data" }` with
//! `code` 1 on success and 0 on failure. `path` defaults to `index`.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docbox_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         root: PathBuf::from("docs"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use docbox_site::{Library, LibraryConfig};
use docbox_storage::FsStorage;
use docbox_vcs::GitPuller;

pub use app::create_router;
pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Document root directory.
    pub root: PathBuf,
    /// Document path of the table of contents.
    pub menu: String,
    /// Remote pulled by the sync hook.
    pub remote: String,
    /// Branch pulled by the sync hook.
    pub branch: String,
    /// Version-control executable.
    pub program: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            root: PathBuf::from("docs"),
            menu: "menus".to_owned(),
            remote: "origin".to_owned(),
            branch: "master".to_owned(),
            program: PathBuf::from("git"),
        }
    }
}

/// Build the document library served for `config`.
#[must_use]
pub fn create_library(config: &ServerConfig) -> Arc<Library> {
    let storage = Arc::new(FsStorage::new(config.root.clone()));
    let puller = Arc::new(
        GitPuller::new(config.remote.clone(), config.branch.clone())
            .with_program(config.program.clone()),
    );
    let library_config = LibraryConfig {
        menu: config.menu.clone(),
        ..LibraryConfig::default()
    };
    Arc::new(Library::new(storage, puller, library_config))
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let library = create_library(&config);
    let app = create_router(library);

    let address = format!("{}:{}", config.host, config.port);
    let addr = SocketAddr::from_str(&address).map_err(|source| ServerError::Address {
        address: address.clone(),
        source,
    })?;
    tracing::info!(address = %addr, root = %config.root.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from docbox config.
#[must_use]
pub fn server_config_from_config(config: &docbox_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        root: config.docs_resolved.root.clone(),
        menu: config.docs_resolved.menu.clone(),
        remote: config.sync.remote.clone(),
        branch: config.sync.branch.clone(),
        program: PathBuf::from(&config.sync.program),
    }
}
