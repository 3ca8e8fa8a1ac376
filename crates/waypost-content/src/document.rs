//! Parsed document model.

use std::path::PathBuf;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::frontmatter::{FrontMatter, FrontMatterError, split_front_matter};

/// A markdown document in the content tree.
///
/// Built once during scanning and immutable afterwards. The title is resolved
/// at build time with the precedence: front-matter `title`, first `#` heading
/// of the body, file stem.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Slug relative to the content root (e.g. "guides/example", "" for the
    /// root index).
    pub slug: String,
    /// Resolved document title. Never empty.
    pub title: String,
    /// Description from front-matter.
    pub description: Option<String>,
    /// Navigation label override from `sidebar.label`.
    pub sidebar_label: Option<String>,
    /// Explicit ordering weight from `sidebar.order`.
    pub order: Option<i64>,
    /// Excluded from autogenerated navigation when set.
    pub hidden: bool,
    /// Source file path.
    pub source_path: PathBuf,
    /// Markdown body with the front-matter block removed.
    pub body: String,
}

impl Document {
    /// Build a document from its raw source.
    ///
    /// # Errors
    ///
    /// Returns an error if the front-matter block is unterminated or
    /// contains malformed YAML.
    pub fn from_source(
        slug: String,
        source_path: PathBuf,
        source: &str,
    ) -> Result<Self, FrontMatterError> {
        let (yaml, body) = split_front_matter(source)?;
        let front = match yaml {
            Some(yaml) => FrontMatter::from_yaml(yaml)?,
            None => FrontMatter::default(),
        };

        let title = front
            .title
            .or_else(|| first_heading(body))
            .unwrap_or_else(|| file_stem(&source_path));

        Ok(Self {
            slug,
            title,
            description: front.description,
            sidebar_label: front.sidebar.label,
            order: front.sidebar.order,
            hidden: front.sidebar.hidden,
            source_path,
            body: body.to_owned(),
        })
    }

    /// Navigation label for this document.
    ///
    /// The `sidebar.label` override wins over the title.
    #[must_use]
    pub fn label(&self) -> &str {
        self.sidebar_label.as_deref().unwrap_or(&self.title)
    }
}

/// Extract the text of the first level-1 heading in a markdown body.
fn first_heading(body: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut text = String::new();

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading { level, .. }) if level == pulldown_cmark::HeadingLevel::H1 => {
                in_h1 = true;
            }
            Event::End(TagEnd::Heading(pulldown_cmark::HeadingLevel::H1)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                return Some(trimmed.to_owned());
            }
            Event::Text(t) | Event::Code(t) if in_h1 => text.push_str(&t),
            _ => {}
        }
    }
    None
}

/// File stem of a source path, used as the last-resort title.
fn file_stem(path: &std::path::Path) -> String {
    path.file_stem()
        .map_or_else(|| "untitled".to_owned(), |s| s.to_string_lossy().into_owned())
}
