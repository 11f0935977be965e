//! `docbox serve` command implementation.

use clap::Args;
use docbox_config::CliSettings;
use docbox_server::{run_server, server_config_from_config};

use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and cache logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.config.load(CliSettings {
            host: self.host,
            port: self.port,
            root: None,
        })?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Document root: {}",
            config.docs_resolved.root.display()
        ));
        output.detail(&format!(
            "Sync hook pulls {} {}",
            config.sync.remote, config.sync.branch
        ));

        run_server(server_config_from_config(&config)).await?;

        Ok(())
    }
}
