//! YAML front-matter parsing.
//!
//! Documents may start with a `---` delimited YAML block carrying the title,
//! description, and per-document sidebar hints. The block is split off the
//! body before markdown rendering.

use serde::Deserialize;

/// Parsed front-matter fields.
///
/// All fields are optional. A document without front-matter gets a default
/// instance, and titles fall back to the first heading or the file stem.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FrontMatter {
    /// Document title, used as the default navigation label.
    pub title: Option<String>,
    /// Short description for navigation or page metadata.
    pub description: Option<String>,
    /// Navigation hints.
    #[serde(default)]
    pub sidebar: SidebarHints,
}

/// Per-document navigation hints from the `sidebar` front-matter key.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SidebarHints {
    /// Label override for navigation entries (takes precedence over title).
    pub label: Option<String>,
    /// Explicit ordering weight. Documents with an order come first,
    /// ascending; the rest follow in slug-lexical order.
    pub order: Option<i64>,
    /// Exclude this document from autogenerated navigation groups.
    #[serde(default)]
    pub hidden: bool,
}

/// Error type for front-matter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// The opening `---` fence was never closed.
    #[error("unterminated front matter block")]
    Unterminated,
    /// The YAML inside the fences is malformed.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FrontMatter {
    /// Parse front-matter from raw YAML content.
    ///
    /// Empty or whitespace-only content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns [`FrontMatterError::Yaml`] if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, FrontMatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(trimmed)?)
    }
}

/// Split a document source into its front-matter block and body.
///
/// The front-matter block is a leading `---` line, YAML content, and a
/// closing `---` (or `...`) line. Returns `(None, source)` when the source
/// does not start with a fence.
///
/// # Errors
///
/// Returns [`FrontMatterError::Unterminated`] if the opening fence has no
/// closing fence.
pub fn split_front_matter(source: &str) -> Result<(Option<&str>, &str), FrontMatterError> {
    let Some(rest) = strip_fence_line(source) else {
        return Ok((None, source));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((Some(yaml), body));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

/// Strip a leading `---` fence line, returning the content after it.
fn strip_fence_line(source: &str) -> Option<&str> {
    let rest = source.strip_prefix("---")?;
    // The fence must be alone on its line
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    rest.strip_prefix('\n')
}
