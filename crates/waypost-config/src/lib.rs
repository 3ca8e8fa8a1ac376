//! Configuration management for waypost.
//!
//! Parses `waypost.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The `[[sidebar]]` groups of the file are the Sidebar Specification: they
//! are parsed once at load time, validated, and never mutated afterwards.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path-valued configuration supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `content.dir`
//! - `build.out_dir`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use waypost_nav::SidebarGroup;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "waypost.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the content source directory.
    pub content_dir: Option<PathBuf>,
    /// Override the build output directory.
    pub out_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteSection,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentSectionRaw,
    /// Build output configuration (paths are relative strings from TOML).
    build: BuildSectionRaw,
    /// The sidebar specification, in display order.
    pub sidebar: Vec<SidebarGroup>,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths: ResolvedPaths,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title, shown in the page shell and the sidebar header.
    pub title: String,
    /// Optional site description.
    pub description: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: None,
        }
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentSectionRaw {
    dir: Option<String>,
}

/// Raw build configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildSectionRaw {
    out_dir: Option<String>,
}

/// Resolved filesystem paths with the config directory applied.
#[derive(Debug, Default, Clone)]
pub struct ResolvedPaths {
    /// Directory holding the markdown content tree.
    pub content_dir: PathBuf,
    /// Directory the static site is written to.
    pub out_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `content.dir`).
        field: String,
        /// Error message (e.g. `${DOCS_DIR} not set`).
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `waypost.toml` in the current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, or validation rejects the sidebar specification.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.paths.content_dir.clone_from(content_dir);
        }
        if let Some(out_dir) = &settings.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to the current directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to the given base.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSection::default(),
            content: ContentSectionRaw::default(),
            build: BuildSectionRaw::default(),
            sidebar: Vec::new(),
            paths: ResolvedPaths {
                content_dir: base.join("docs"),
                out_dir: base.join("dist"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Expand env vars in raw path strings and resolve them against `base`.
    fn resolve_paths(&mut self, base: &Path) -> Result<(), ConfigError> {
        let content_dir = match &self.content.dir {
            Some(dir) => expand::expand_env(dir, "content.dir")?,
            None => "docs".to_owned(),
        };
        let out_dir = match &self.build.out_dir {
            Some(dir) => expand::expand_env(dir, "build.out_dir")?,
            None => "dist".to_owned(),
        };

        self.paths = ResolvedPaths {
            content_dir: resolve_against(base, &content_dir),
            out_dir: resolve_against(base, &out_dir),
        };
        Ok(())
    }

    /// Validate configuration after loading and resolution.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title cannot be empty".to_owned(),
            ));
        }
        waypost_nav::validate(&self.sidebar)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(())
    }
}

/// Join a possibly-relative path onto a base directory.
fn resolve_against(base: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
