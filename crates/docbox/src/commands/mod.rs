//! CLI command implementations.

pub(crate) mod search;
pub(crate) mod serve;
pub(crate) mod sync;
pub(crate) mod title;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use docbox_config::{CliSettings, Config};
use docbox_server::{create_library, server_config_from_config};
use docbox_site::Library;

use crate::error::CliError;

pub(crate) use search::SearchArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use sync::SyncArgs;
pub(crate) use title::TitleArgs;

/// Configuration arguments shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docbox.toml).
    #[arg(short, long, env = "DOCBOX_CONFIG")]
    config: Option<PathBuf>,

    /// Document root directory (overrides config).
    #[arg(short, long)]
    root: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration, applying `--root` and any extra overrides.
    pub(crate) fn load(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            root: self.root.clone(),
            ..settings
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        config.validate()?;
        Ok(config)
    }

    /// Build the document library described by the configuration.
    pub(crate) fn library(&self) -> Result<Arc<Library>, CliError> {
        let config = self.load(CliSettings::default())?;
        Ok(create_library(&server_config_from_config(&config)))
    }
}
