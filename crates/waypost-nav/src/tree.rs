//! Rendered navigation tree.
//!
//! The output of resolution, consumed by the page layer and serialized to
//! `nav.json`. Ordering is significant and preserved verbatim: insertion
//! order equals display order.

use serde::Serialize;

/// The fully resolved navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NavTree {
    /// Top-level groups, in specification order.
    pub groups: Vec<NavGroup>,
}

/// A resolved navigation group.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavGroup {
    /// Display label.
    pub label: String,
    /// Resolved entries, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<NavNode>,
}

/// A resolved navigation entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Link to a document.
    Link(NavLink),
    /// Nested group.
    Group(NavGroup),
}

/// A resolved link to a document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Slug of the target document.
    pub slug: String,
}

impl NavTree {
    /// True when no groups are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over every link in the tree, depth-first.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.groups.iter().flat_map(NavGroup::links)
    }
}

impl NavGroup {
    /// Iterate over every link in this group, depth-first.
    pub fn links(&self) -> Box<dyn Iterator<Item = &NavLink> + '_> {
        Box::new(self.entries.iter().flat_map(|entry| match entry {
            NavNode::Link(link) => Box::new(std::iter::once(link)) as Box<dyn Iterator<Item = _>>,
            NavNode::Group(group) => group.links(),
        }))
    }
}
