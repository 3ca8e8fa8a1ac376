//! Markdown-to-HTML conversion for document bodies.

use pulldown_cmark::{Options, Parser, html};

/// Render a markdown body (front-matter already removed) to HTML.
///
/// GFM tables, strikethrough, footnotes, and task lists are enabled.
#[must_use]
pub fn render_markdown(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(body, options);
    let mut output = String::with_capacity(body.len() * 2);
    html::push_html(&mut output, parser);
    output
}
