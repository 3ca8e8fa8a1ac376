//! Document discovery by filesystem walking.
//!
//! The scanner walks the content directory once per build, parses each
//! markdown source it finds, and returns the resulting [`Document`] list.
//! Hidden files and directories are skipped. A missing content root yields
//! an empty scan rather than an error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::frontmatter::FrontMatterError;

/// Error type for content scanning.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Filesystem error while walking or reading.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation failed on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Front-matter parse failure in one document.
    #[error("invalid front matter in {}: {source}", path.display())]
    FrontMatter {
        /// Source file with the malformed block.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: FrontMatterError,
    },
    /// Two source files map to the same slug (e.g. `guide.md` and
    /// `guide.mdx`).
    #[error("duplicate slug '{slug}': {} and {}", first.display(), second.display())]
    DuplicateSlug {
        /// The colliding slug.
        slug: String,
        /// First source file.
        first: PathBuf,
        /// Second source file.
        second: PathBuf,
    },
}

/// Discovers and parses documents under a content directory.
pub struct Scanner {
    content_dir: PathBuf,
}

impl Scanner {
    /// Create a new scanner rooted at `content_dir`.
    #[must_use]
    pub fn new(content_dir: PathBuf) -> Self {
        Self { content_dir }
    }

    /// Walk the content directory and parse every markdown document.
    ///
    /// Returns an empty list if the content directory does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] on filesystem failures, malformed front-matter,
    /// or slug collisions.
    pub fn scan(&self) -> Result<Vec<Document>, ScanError> {
        let mut documents = Vec::new();
        if !self.content_dir.exists() {
            tracing::warn!(
                content_dir = %self.content_dir.display(),
                "Content directory does not exist; scanning nothing"
            );
            return Ok(documents);
        }

        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        self.scan_directory(&self.content_dir, "", &mut documents, &mut seen)?;
        Ok(documents)
    }

    /// Scan one directory level and recurse into subdirectories.
    fn scan_directory(
        &self,
        dir_path: &Path,
        slug_prefix: &str,
        documents: &mut Vec<Document>,
        seen: &mut HashMap<String, PathBuf>,
    ) -> Result<(), ScanError> {
        let entries = fs::read_dir(dir_path).map_err(|source| ScanError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| ScanError::Io {
                path: dir_path.to_path_buf(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry
                .file_type()
                .map_err(|source| ScanError::Io {
                    path: path.clone(),
                    source,
                })?
                .is_dir();

            if is_dir {
                let child_prefix = if slug_prefix.is_empty() {
                    name
                } else {
                    format!("{slug_prefix}/{name}")
                };
                self.scan_directory(&path, &child_prefix, documents, seen)?;
            } else if is_markdown(&path) {
                let slug = slug_for_path(Path::new(&entry.file_name()), slug_prefix);
                if let Some(first) = seen.get(&slug) {
                    return Err(ScanError::DuplicateSlug {
                        slug,
                        first: first.clone(),
                        second: path,
                    });
                }

                let source = fs::read_to_string(&path).map_err(|source| ScanError::Io {
                    path: path.clone(),
                    source,
                })?;
                let document = Document::from_source(slug.clone(), path.clone(), &source)
                    .map_err(|source| ScanError::FrontMatter { path, source })?;

                seen.insert(slug, document.source_path.clone());
                documents.push(document);
            }
        }

        Ok(())
    }
}

/// True for `.md` and `.mdx` sources.
fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "md" || ext == "mdx")
}

/// Derive a slug from a file name and its directory's slug prefix.
///
/// The extension is stripped and `index` files collapse to their directory
/// slug:
/// - `index.md` with prefix `""` -> `""`
/// - `example.md` with prefix `"guides"` -> `"guides/example"`
/// - `index.md` with prefix `"guides"` -> `"guides"`
#[must_use]
pub fn slug_for_path(file_name: &Path, prefix: &str) -> String {
    let stem = file_name
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());

    let part = if stem == "index" { "" } else { stem.as_str() };

    match (prefix.is_empty(), part.is_empty()) {
        (true, _) => part.to_owned(),
        (false, true) => prefix.to_owned(),
        (false, false) => format!("{prefix}/{part}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_content_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_slug_for_path() {
        assert_eq!(slug_for_path(Path::new("index.md"), ""), "");
        assert_eq!(slug_for_path(Path::new("guide.md"), ""), "guide");
        assert_eq!(slug_for_path(Path::new("index.md"), "guides"), "guides");
        assert_eq!(
            slug_for_path(Path::new("example.mdx"), "guides"),
            "guides/example"
        );
        assert_eq!(slug_for_path(Path::new("setup.md"), "a/b"), "a/b/setup");
    }

    #[test]
    fn test_scan_finds_markdown_files() {
        let temp = create_content_dir();
        fs::write(temp.path().join("guide.md"), "# Guide").unwrap();
        let sub = temp.path().join("guides");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("example.md"), "---\ntitle: Example Guide\n---\n").unwrap();

        let docs = Scanner::new(temp.path().to_path_buf()).scan().unwrap();

        assert_eq!(docs.len(), 2);
        let slugs: Vec<_> = docs.iter().map(|d| d.slug.as_str()).collect();
        assert!(slugs.contains(&"guide"));
        assert!(slugs.contains(&"guides/example"));
    }

    #[test]
    fn test_scan_collapses_index_files() {
        let temp = create_content_dir();
        fs::write(temp.path().join("index.md"), "# Home").unwrap();
        let sub = temp.path().join("guides");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("index.md"), "# Guides").unwrap();

        let docs = Scanner::new(temp.path().to_path_buf()).scan().unwrap();

        let slugs: Vec<_> = docs.iter().map(|d| d.slug.as_str()).collect();
        assert!(slugs.contains(&""));
        assert!(slugs.contains(&"guides"));
    }

    #[test]
    fn test_scan_reads_mdx() {
        let temp = create_content_dir();
        fs::write(temp.path().join("page.mdx"), "# MDX Page").unwrap();

        let docs = Scanner::new(temp.path().to_path_buf()).scan().unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "MDX Page");
    }

    #[test]
    fn test_scan_skips_hidden_and_non_markdown() {
        let temp = create_content_dir();
        fs::write(temp.path().join(".draft.md"), "# Draft").unwrap();
        fs::write(temp.path().join("notes.txt"), "notes").unwrap();
        fs::write(temp.path().join("visible.md"), "# Visible").unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        let docs = Scanner::new(temp.path().to_path_buf()).scan().unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug, "visible");
    }

    #[test]
    fn test_scan_missing_content_dir_is_empty() {
        let docs = Scanner::new(PathBuf::from("/nonexistent/docs"))
            .scan()
            .unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_scan_duplicate_slug_is_error() {
        let temp = create_content_dir();
        fs::write(temp.path().join("guide.md"), "# A").unwrap();
        fs::write(temp.path().join("guide.mdx"), "# B").unwrap();

        let result = Scanner::new(temp.path().to_path_buf()).scan();

        match result {
            Err(ScanError::DuplicateSlug { slug, .. }) => assert_eq!(slug, "guide"),
            other => panic!("expected DuplicateSlug, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_malformed_front_matter_names_file() {
        let temp = create_content_dir();
        fs::write(temp.path().join("bad.md"), "---\ntitle: [unclosed\n---\n").unwrap();

        let result = Scanner::new(temp.path().to_path_buf()).scan();

        match result {
            Err(ScanError::FrontMatter { path, .. }) => {
                assert!(path.ends_with("bad.md"));
            }
            other => panic!("expected FrontMatter error, got {other:?}"),
        }
    }
}
