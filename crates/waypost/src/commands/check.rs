//! `waypost check` command.

use std::path::PathBuf;

use clap::Args;

use waypost_config::CliSettings;
use waypost_site::SiteBuilder;

use crate::commands::{load_config, site_options};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to waypost.toml (discovered in parent directories by default).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Enable info-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Validate content and navigation without writing output.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            content_dir: self.content_dir,
            out_dir: None,
        };
        let config = load_config(self.config.as_deref(), &settings)?;

        let summary = SiteBuilder::new(site_options(config)).check()?;

        output.success(&format!(
            "OK: {} documents, {} navigation groups, all references resolve",
            summary.documents, summary.groups
        ));
        Ok(())
    }
}
