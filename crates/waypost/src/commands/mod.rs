//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod nav;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;

use std::path::Path;

use waypost_config::{CliSettings, Config};
use waypost_site::SiteOptions;

use crate::error::CliError;

/// Load configuration with CLI overrides applied.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    settings: &CliSettings,
) -> Result<Config, CliError> {
    Ok(Config::load(config_path, Some(settings))?)
}

/// Map a loaded configuration onto site build options.
pub(crate) fn site_options(config: Config) -> SiteOptions {
    SiteOptions {
        site_title: config.site.title,
        site_description: config.site.description,
        content_dir: config.paths.content_dir,
        out_dir: config.paths.out_dir,
        sidebar: config.sidebar,
    }
}
