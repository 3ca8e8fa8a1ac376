//! Sidebar specification and navigation resolution for waypost.
//!
//! The sidebar specification is declarative configuration: an ordered list
//! of groups, each carrying explicit entries and/or a directory
//! autogeneration directive. [`resolve`] transforms a specification plus a
//! [`ContentTree`](waypost_content::ContentTree) into the rendered
//! [`NavTree`] consumed by the page layer.
//!
//! Resolution is a pure, synchronous, single-pass transform: resolving the
//! same specification against an unchanged content tree always yields the
//! same navigation tree.
//!
//! # Example
//!
//! ```
//! use waypost_content::{ContentTree, Document};
//! use waypost_nav::{SidebarEntry, SidebarGroup, resolve};
//!
//! let doc = Document::from_source(
//!     "guides/example".to_owned(),
//!     "guides/example.md".into(),
//!     "---\ntitle: Example Guide\n---\n",
//! )
//! .unwrap();
//! let content = ContentTree::from_documents(vec![doc]);
//!
//! let sidebar = vec![SidebarGroup {
//!     label: "Guides".to_owned(),
//!     items: vec![SidebarEntry::Link {
//!         label: "Example Guide".to_owned(),
//!         slug: "guides/example".to_owned(),
//!     }],
//!     autogenerate: None,
//! }];
//!
//! let nav = resolve(&sidebar, &content).unwrap();
//! assert_eq!(nav.groups.len(), 1);
//! assert_eq!(nav.groups[0].label, "Guides");
//! ```

mod resolver;
mod sidebar;
mod tree;

pub use resolver::{ResolveError, resolve};
pub use sidebar::{Autogenerate, SidebarEntry, SidebarError, SidebarGroup, validate};
pub use tree::{NavGroup, NavLink, NavNode, NavTree};
