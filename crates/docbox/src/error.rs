//! CLI error types.

use docbox_config::ConfigError;
use docbox_server::ServerError;
use docbox_site::PullError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("Sync of {root} failed: {source}")]
    SyncFailed {
        root: String,
        #[source]
        source: PullError,
    },
}
