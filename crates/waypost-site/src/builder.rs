//! Site build orchestration.
//!
//! A build is a single synchronous batch: scan the content tree, resolve
//! the sidebar specification against it, render every document into the
//! output directory, and write the serialized navigation tree. There is no
//! incremental mode and no shared mutable state; each build starts from the
//! filesystem as it is.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use waypost_content::{ContentTree, ScanError, Scanner};
use waypost_nav::{NavTree, ResolveError, SidebarGroup, resolve};

use crate::html::{page_shell, render_nav};
use crate::render::render_markdown;

/// Convert elapsed time to milliseconds as f64.
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Options for [`SiteBuilder`].
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// Site title for the page shell.
    pub site_title: String,
    /// Optional site description, used when a document has none.
    pub site_description: Option<String>,
    /// Directory holding the markdown content tree.
    pub content_dir: PathBuf,
    /// Directory the static site is written to.
    pub out_dir: PathBuf,
    /// The sidebar specification.
    pub sidebar: Vec<SidebarGroup>,
}

/// Result of a completed build.
#[derive(Clone, Debug)]
pub struct BuildSummary {
    /// Number of pages written.
    pub pages: usize,
    /// Number of top-level navigation groups.
    pub groups: usize,
    /// Wall-clock build time in milliseconds.
    pub elapsed_ms: f64,
}

/// Result of a check pass (no output written).
#[derive(Clone, Debug)]
pub struct CheckSummary {
    /// Number of documents scanned.
    pub documents: usize,
    /// Number of top-level navigation groups.
    pub groups: usize,
}

/// Error returned when a build fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Content scanning failed.
    #[error("{0}")]
    Scan(#[from] ScanError),
    /// Navigation resolution failed (broken reference or invalid sidebar).
    #[error("{0}")]
    Resolve(#[from] ResolveError),
    /// Serializing the navigation tree failed.
    #[error("failed to serialize navigation tree: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Writing the output failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation failed on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Builds a static site from a content tree and a sidebar specification.
pub struct SiteBuilder {
    options: SiteOptions,
}

impl SiteBuilder {
    /// Create a builder.
    #[must_use]
    pub fn new(options: SiteOptions) -> Self {
        Self { options }
    }

    /// Scan and resolve without writing any output.
    ///
    /// This is the validation surface: it fails exactly when a full build
    /// would fail, including on broken navigation references.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] on scan or resolution failure.
    pub fn check(&self) -> Result<CheckSummary, BuildError> {
        let (content, nav) = self.load()?;
        Ok(CheckSummary {
            documents: content.len(),
            groups: nav.groups.len(),
        })
    }

    /// Build the site into the output directory.
    ///
    /// Renders every document to `<out_dir>/<slug>/index.html` and writes
    /// the resolved navigation tree to `<out_dir>/nav.json`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] on scan failure, resolution failure, or
    /// output I/O failure.
    pub fn build(&self) -> Result<BuildSummary, BuildError> {
        let start = Instant::now();
        let (content, nav) = self.load()?;

        for document in content.documents() {
            let body_html = render_markdown(&document.body);
            let nav_html = render_nav(&nav, &document.slug);
            let description = document
                .description
                .as_deref()
                .or(self.options.site_description.as_deref());
            let page = page_shell(
                &self.options.site_title,
                &document.title,
                description,
                &nav_html,
                &body_html,
            );
            self.write_output(&page_path(&self.options.out_dir, &document.slug), &page)?;
        }

        let nav_json = serde_json::to_string_pretty(&nav)?;
        self.write_output(&self.options.out_dir.join("nav.json"), &nav_json)?;

        let summary = BuildSummary {
            pages: content.len(),
            groups: nav.groups.len(),
            elapsed_ms: elapsed_ms(start),
        };
        tracing::info!(
            pages = summary.pages,
            groups = summary.groups,
            elapsed_ms = summary.elapsed_ms,
            out_dir = %self.options.out_dir.display(),
            "Site built"
        );
        Ok(summary)
    }

    /// Scan the content tree and resolve the navigation.
    fn load(&self) -> Result<(ContentTree, NavTree), BuildError> {
        let documents = Scanner::new(self.options.content_dir.clone()).scan()?;
        let content = ContentTree::from_documents(documents);
        let nav = resolve(&self.options.sidebar, &content)?;
        Ok((content, nav))
    }

    /// Write one output file, creating parent directories.
    fn write_output(&self, path: &Path, contents: &str) -> Result<(), BuildError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| BuildError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, contents).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Output path for a document slug.
fn page_path(out_dir: &Path, slug: &str) -> PathBuf {
    if slug.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(slug).join("index.html")
    }
}
