//! `waypost nav` command.

use std::path::PathBuf;

use clap::Args;

use waypost_config::CliSettings;
use waypost_content::{ContentTree, Scanner};
use waypost_nav::resolve;

use crate::commands::load_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Path to waypost.toml (discovered in parent directories by default).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

impl NavArgs {
    /// Resolve the navigation tree and print it as JSON.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref(), &CliSettings::default())?;

        let documents = Scanner::new(config.paths.content_dir.clone()).scan()?;
        let content = ContentTree::from_documents(documents);
        let nav = resolve(&config.sidebar, &content)?;

        let json = if self.pretty {
            serde_json::to_string_pretty(&nav)?
        } else {
            serde_json::to_string(&nav)?
        };
        output.data(&json);
        Ok(())
    }
}
