//! Content tree scanning and document model for waypost.
//!
//! This crate provides:
//! - [`Scanner`]: recursive discovery of markdown documents in a content
//!   directory
//! - [`Document`]: a parsed document with slug, title, and navigation hints
//! - [`ContentTree`]: an immutable collection of documents with slug lookup
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use waypost_content::{ContentTree, Scanner};
//!
//! let scanner = Scanner::new(PathBuf::from("docs"));
//! let tree = ContentTree::from_documents(scanner.scan()?);
//!
//! if let Some(doc) = tree.get("guides/example") {
//!     assert!(!doc.label().is_empty());
//! }
//! # Ok(())
//! # }
//! ```

mod document;
mod frontmatter;
mod scanner;
mod tree;

pub use document::Document;
pub use frontmatter::{FrontMatter, FrontMatterError, SidebarHints, split_front_matter};
pub use scanner::{ScanError, Scanner, slug_for_path};
pub use tree::ContentTree;
