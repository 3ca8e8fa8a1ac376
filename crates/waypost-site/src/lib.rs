//! Page rendering and site build orchestration for waypost.
//!
//! This crate ties the content tree and the navigation resolver together
//! into a static site build:
//! - [`render_markdown`]: markdown-to-HTML conversion for document bodies
//! - [`SiteBuilder`]: the synchronous batch build (scan, resolve, render,
//!   write) and the non-writing `check` pass
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use waypost_site::{SiteBuilder, SiteOptions};
//!
//! let builder = SiteBuilder::new(SiteOptions {
//!     site_title: "Docs".to_owned(),
//!     site_description: None,
//!     content_dir: PathBuf::from("docs"),
//!     out_dir: PathBuf::from("dist"),
//!     sidebar: Vec::new(),
//! });
//! let summary = builder.build()?;
//! let _ = summary.pages;
//! # Ok(())
//! # }
//! ```

mod builder;
mod html;
mod render;

pub use builder::{BuildError, BuildSummary, CheckSummary, SiteBuilder, SiteOptions};
pub use html::{escape_html, href_for};
pub use render::render_markdown;
