//! `docbox title` command implementation.

use clap::Args;

use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the title command.
#[derive(Args)]
pub(crate) struct TitleArgs {
    /// Document path (e.g., guide/intro).
    path: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl TitleArgs {
    /// Print the breadcrumb title of a document.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let library = self.config.library()?;
        let title = library.resolve_title(&self.path);

        if title.is_empty() {
            output.warning(&format!(
                "{} is not listed in the table of contents",
                self.path
            ));
        } else {
            output.result(&title);
        }
        Ok(())
    }
}
