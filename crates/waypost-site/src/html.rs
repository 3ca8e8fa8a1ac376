//! Static page shell and sidebar markup.
//!
//! The shell is deliberately minimal: a sidebar column with the resolved
//! navigation tree and a main column with the rendered document. No
//! JavaScript, no theming layer.

use std::fmt::Write;

use waypost_nav::{NavGroup, NavNode, NavTree};

/// Escape a string for interpolation into HTML.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Root-absolute href for a document slug.
///
/// The root index ("") maps to `/`; everything else gets a trailing slash
/// to match the `<slug>/index.html` output layout.
#[must_use]
pub fn href_for(slug: &str) -> String {
    if slug.is_empty() {
        "/".to_owned()
    } else {
        format!("/{slug}/")
    }
}

/// Render the sidebar navigation markup.
#[must_use]
pub(crate) fn render_nav(nav: &NavTree, active_slug: &str) -> String {
    let mut out = String::new();
    out.push_str("<nav class=\"sidebar-nav\">\n");
    for group in &nav.groups {
        render_group(&mut out, group, active_slug, 2);
    }
    out.push_str("</nav>\n");
    out
}

fn render_group(out: &mut String, group: &NavGroup, active_slug: &str, level: u8) {
    let _ = writeln!(
        out,
        "<section class=\"nav-group\">\n<h{level}>{}</h{level}>",
        escape_html(&group.label)
    );
    out.push_str("<ul>\n");
    for entry in &group.entries {
        match entry {
            NavNode::Link(link) => {
                let class = if link.slug == active_slug {
                    " class=\"active\" aria-current=\"page\""
                } else {
                    ""
                };
                let _ = writeln!(
                    out,
                    "<li><a href=\"{}\"{class}>{}</a></li>",
                    escape_html(&href_for(&link.slug)),
                    escape_html(&link.label)
                );
            }
            NavNode::Group(nested) => {
                out.push_str("<li>\n");
                render_group(out, nested, active_slug, level.saturating_add(1).min(6));
                out.push_str("</li>\n");
            }
        }
    }
    out.push_str("</ul>\n</section>\n");
}

/// Assemble a full page from its parts.
#[must_use]
pub(crate) fn page_shell(
    site_title: &str,
    page_title: &str,
    description: Option<&str>,
    nav_html: &str,
    body_html: &str,
) -> String {
    let description_meta = description.map_or_else(String::new, |d| {
        format!("<meta name=\"description\" content=\"{}\">\n", escape_html(d))
    });

    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {description_meta}<title>{page} | {site}</title>\n\
         <style>\n\
         body {{ display: flex; margin: 0; font-family: sans-serif; }}\n\
         .sidebar {{ width: 18rem; padding: 1rem; border-right: 1px solid #ddd; }}\n\
         main {{ flex: 1; padding: 1rem 2rem; max-width: 50rem; }}\n\
         .sidebar-nav a.active {{ font-weight: bold; }}\n\
         </style>\n\
         </head>\n<body>\n\
         <aside class=\"sidebar\">\n<a href=\"/\"><strong>{site}</strong></a>\n{nav}</aside>\n\
         <main>\n{body}</main>\n\
         </body>\n</html>\n",
        page = escape_html(page_title),
        site = escape_html(site_title),
        nav = nav_html,
        body = body_html,
    )
}
