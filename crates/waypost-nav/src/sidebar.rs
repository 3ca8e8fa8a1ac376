//! Sidebar specification types and validation.
//!
//! These types deserialize from the `[[sidebar]]` groups of `waypost.toml`.
//! The specification is constructed once at build configuration time and is
//! immutable afterwards.

use serde::Deserialize;

/// One navigation group in the sidebar specification.
///
/// A group usually populates either `items` or `autogenerate`. Both are
/// structurally permitted; when both are present, explicit items precede the
/// autogenerated entries. A group with neither renders empty.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    /// Display label. Unique among sibling groups.
    pub label: String,
    /// Explicit entries, emitted in specification order.
    #[serde(default)]
    pub items: Vec<SidebarEntry>,
    /// Directory autogeneration directive.
    #[serde(default)]
    pub autogenerate: Option<Autogenerate>,
}

/// An entry inside a group: an explicit link or a nested group.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Named pointer to a document in the content tree.
    Link {
        /// Display label.
        label: String,
        /// Target document slug.
        slug: String,
    },
    /// Nested group.
    Group(SidebarGroup),
}

/// Directive to derive a group's entries from a content subdirectory.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Autogenerate {
    /// Content subdirectory to enumerate, relative to the content root.
    pub directory: String,
}

/// Error type for sidebar specification validation.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Two sibling groups share a label, which would render ambiguously.
    #[error("duplicate sidebar group label '{0}'")]
    DuplicateLabel(String),
    /// A group without a label cannot be displayed.
    #[error("sidebar group with empty label")]
    EmptyLabel,
    /// An explicit link with no target.
    #[error("sidebar item '{label}' has an empty slug")]
    EmptySlug {
        /// Label of the offending item.
        label: String,
    },
}

/// Validate a sidebar specification.
///
/// Checks that every group has a label, that sibling group labels are unique
/// at each nesting level, and that explicit links carry a slug.
///
/// # Errors
///
/// Returns the first [`SidebarError`] found, in specification order.
pub fn validate(sidebar: &[SidebarGroup]) -> Result<(), SidebarError> {
    validate_siblings(sidebar.iter())
}

fn validate_siblings<'a, I>(groups: I) -> Result<(), SidebarError>
where
    I: Iterator<Item = &'a SidebarGroup>,
{
    let mut labels = Vec::new();
    for group in groups {
        if group.label.trim().is_empty() {
            return Err(SidebarError::EmptyLabel);
        }
        if labels.contains(&group.label.as_str()) {
            return Err(SidebarError::DuplicateLabel(group.label.clone()));
        }
        labels.push(group.label.as_str());
        validate_entries(&group.items)?;
    }
    Ok(())
}

fn validate_entries(entries: &[SidebarEntry]) -> Result<(), SidebarError> {
    for entry in entries {
        if let SidebarEntry::Link { label, slug } = entry {
            if slug.trim().is_empty() {
                return Err(SidebarError::EmptySlug {
                    label: label.clone(),
                });
            }
        }
    }
    // Nested groups are validated as a sibling set of their own
    validate_siblings(entries.iter().filter_map(|entry| match entry {
        SidebarEntry::Group(group) => Some(group),
        SidebarEntry::Link { .. } => None,
    }))
}
