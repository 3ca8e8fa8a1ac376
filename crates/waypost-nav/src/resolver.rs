//! Navigation resolution.
//!
//! [`resolve`] turns a sidebar specification and a content tree into a
//! [`NavTree`]. Explicit entries pass through in specification order after
//! reference validation; autogeneration directives enumerate a content
//! subdirectory recursively.
//!
//! # Error policy
//!
//! A broken explicit reference is fatal: publishing a dead link is worse
//! than failing the build. A missing autogenerate directory only renders an
//! empty group and logs a warning for the content author.

use std::collections::BTreeMap;

use waypost_content::{ContentTree, Document};

use crate::sidebar::{SidebarEntry, SidebarGroup, SidebarError, validate};
use crate::tree::{NavGroup, NavLink, NavNode, NavTree};

/// Error type for navigation resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// An explicit sidebar item points at a slug with no matching document.
    #[error(
        "broken navigation reference: item '{label}' points at '{slug}', which matches no document"
    )]
    BrokenReference {
        /// Label of the offending item.
        label: String,
        /// Target slug that failed to resolve.
        slug: String,
    },
    /// The specification itself is invalid.
    #[error("invalid sidebar specification: {0}")]
    Invalid(#[from] SidebarError),
}

/// Resolve a sidebar specification against a content tree.
///
/// Pure and synchronous; resolving the same specification against an
/// unchanged tree twice yields identical navigation trees.
///
/// # Errors
///
/// Returns [`ResolveError::Invalid`] when the specification violates its
/// invariants and [`ResolveError::BrokenReference`] when an explicit item
/// targets a missing document.
pub fn resolve(sidebar: &[SidebarGroup], content: &ContentTree) -> Result<NavTree, ResolveError> {
    validate(sidebar)?;

    let groups = sidebar
        .iter()
        .map(|group| resolve_group(group, content))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NavTree { groups })
}

/// Resolve one group: explicit items first, autogenerated entries after.
fn resolve_group(group: &SidebarGroup, content: &ContentTree) -> Result<NavGroup, ResolveError> {
    let mut entries = Vec::with_capacity(group.items.len());

    for entry in &group.items {
        match entry {
            SidebarEntry::Link { label, slug } => {
                if content.get(slug).is_none() {
                    return Err(ResolveError::BrokenReference {
                        label: label.clone(),
                        slug: slug.clone(),
                    });
                }
                entries.push(NavNode::Link(NavLink {
                    label: label.clone(),
                    slug: slug.clone(),
                }));
            }
            SidebarEntry::Group(nested) => {
                entries.push(NavNode::Group(resolve_group(nested, content)?));
            }
        }
    }

    if let Some(auto) = &group.autogenerate {
        let directory = auto.directory.trim_matches('/');
        let docs: Vec<&Document> = content
            .under(directory)
            .into_iter()
            .filter(|doc| !doc.hidden)
            .collect();

        if docs.is_empty() {
            tracing::warn!(
                group = %group.label,
                directory = %auto.directory,
                "autogenerate directory has no documents; group renders empty"
            );
        } else {
            entries.extend(autogenerate_entries(directory, &docs));
        }
    }

    Ok(NavGroup {
        label: group.label.clone(),
        entries,
    })
}

/// Ordering key: entries with an explicit order come first, ascending;
/// the rest follow in slug-lexical order.
type SortKey = (u8, i64, String);

fn sort_key(order: Option<i64>, name: &str) -> SortKey {
    order.map_or_else(|| (1, 0, name.to_owned()), |o| (0, o, name.to_owned()))
}

/// Build entries for a directory: direct documents become links,
/// subdirectories become nested groups.
fn autogenerate_entries(directory: &str, docs: &[&Document]) -> Vec<NavNode> {
    let prefix_len = if directory.is_empty() {
        0
    } else {
        directory.len() + 1
    };
    // First pass: which immediate segments are subdirectories. A document
    // whose rel path equals such a segment is that subdirectory's index and
    // belongs inside the nested group, not beside it.
    let mut subdirs: BTreeMap<&str, Vec<&Document>> = BTreeMap::new();
    for &doc in docs {
        // The directory's own index document has rel == ""
        let rel = doc.slug.get(prefix_len..).unwrap_or("");
        if let Some((segment, _)) = rel.split_once('/') {
            subdirs.entry(segment).or_default().push(doc);
        }
    }

    let mut keyed: Vec<(SortKey, NavNode)> = Vec::new();
    for &doc in docs {
        let rel = doc.slug.get(prefix_len..).unwrap_or("");
        if rel.contains('/') {
            continue;
        }
        if let Some(subdocs) = subdirs.get_mut(rel) {
            subdocs.push(doc);
            continue;
        }
        keyed.push((
            sort_key(doc.order, &doc.slug),
            NavNode::Link(NavLink {
                label: doc.label().to_owned(),
                slug: doc.slug.clone(),
            }),
        ));
    }

    for (segment, subdocs) in subdirs {
        let child_dir = if directory.is_empty() {
            segment.to_owned()
        } else {
            format!("{directory}/{segment}")
        };
        let index_doc = subdocs.iter().find(|doc| doc.slug == child_dir);
        let label = index_doc.map_or_else(|| segment.to_owned(), |doc| doc.label().to_owned());
        let order = index_doc.and_then(|doc| doc.order);

        let entries = autogenerate_entries(&child_dir, &subdocs);
        keyed.push((
            sort_key(order, &child_dir),
            NavNode::Group(NavGroup { label, entries }),
        ));
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, node)| node).collect()
}
