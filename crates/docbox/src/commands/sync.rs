//! `docbox sync` command implementation.

use clap::Args;

use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sync command.
#[derive(Args)]
pub(crate) struct SyncArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl SyncArgs {
    /// Pull the document repository once.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the pull fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let library = self.config.library()?;
        let root = library.root().display().to_string();

        output.info(&format!("Pulling {root}"));
        library
            .try_sync()
            .map_err(|source| CliError::SyncFailed { root, source })?;
        output.success("Documents updated");
        Ok(())
    }
}
