//! Immutable content tree with slug lookup.

use std::collections::HashMap;

use crate::document::Document;

/// Immutable collection of documents with O(1) slug lookup.
///
/// Built once per build pass from the scanner output and never mutated,
/// so repeated navigation resolution against the same tree is stable.
pub struct ContentTree {
    documents: Vec<Document>,
    slug_index: HashMap<String, usize>,
}

impl ContentTree {
    /// Build a tree from scanned documents.
    ///
    /// Slugs are expected to be unique; the scanner enforces this.
    #[must_use]
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let slug_index = documents
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.slug.clone(), i))
            .collect();
        Self {
            documents,
            slug_index,
        }
    }

    /// Look up a document by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Document> {
        self.slug_index.get(slug).map(|&i| &self.documents[i])
    }

    /// All documents, in scan order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the tree holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents under a content subdirectory.
    ///
    /// Includes the directory's own index document (whose slug equals the
    /// directory) and everything below it. An empty `directory` selects the
    /// whole tree.
    #[must_use]
    pub fn under<'a>(&'a self, directory: &str) -> Vec<&'a Document> {
        let dir = directory.trim_matches('/');
        self.documents
            .iter()
            .filter(|doc| {
                if dir.is_empty() {
                    return true;
                }
                doc.slug == dir || doc.slug.starts_with(&format!("{dir}/"))
            })
            .collect()
    }
}
