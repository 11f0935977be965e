//! `docbox search` command implementation.

use clap::Args;

use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Text to look for (case-sensitive substring).
    keyword: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl SearchArgs {
    /// Print the document paths containing the keyword, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let library = self.config.library()?;
        let results = library.search(&self.keyword);

        if results.is_empty() {
            output.warning(&format!("No documents contain \"{}\"", self.keyword));
            return Ok(());
        }
        for path in results.iter() {
            output.result(path);
        }
        output.detail(&format!("{} matching documents", results.len()));
        Ok(())
    }
}
