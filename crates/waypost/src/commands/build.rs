//! `waypost build` command.

use std::path::PathBuf;

use clap::Args;

use waypost_config::CliSettings;
use waypost_site::SiteBuilder;

use crate::commands::{load_config, site_options};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to waypost.toml (discovered in parent directories by default).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Enable info-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Run the build.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            content_dir: self.content_dir,
            out_dir: self.out_dir,
        };
        let config = load_config(self.config.as_deref(), &settings)?;
        let out_dir = config.paths.out_dir.clone();

        let summary = SiteBuilder::new(site_options(config)).build()?;

        output.info(&format!("Output: {}", out_dir.display()));
        output.success(&format!(
            "Built {} pages across {} navigation groups in {:.0} ms",
            summary.pages, summary.groups, summary.elapsed_ms
        ));
        Ok(())
    }
}
