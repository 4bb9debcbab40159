//! HTML microdata renderer
//!
//! Renders a trail as a schema.org `BreadcrumbList`.
//! See <https://developers.google.com/search/docs/appearance/structured-data/breadcrumb>.

use crate::config::TrailConfig;
use crate::models::{Crumb, Trail};
use std::borrow::Cow;

const LIST_OPEN: &str = r#"<ul itemscope itemtype="http://schema.org/BreadcrumbList">"#;
const LIST_CLOSE: &str = "</ul>";

/// Render a trail as an HTML list with breadcrumb microdata
///
/// An empty trail renders as nothing unless the config asks for the
/// empty container.
pub fn render_html(trail: &Trail, config: &TrailConfig) -> String {
    if trail.is_empty() && !config.render_empty_container {
        return String::new();
    }

    let mut output = String::from(LIST_OPEN);
    for crumb in &trail.crumbs {
        output.push_str(&render_item(crumb, &config.separator));
    }
    output.push_str(LIST_CLOSE);
    output
}

/// Render one list item; only linked crumbs get the separator
fn render_item(crumb: &Crumb, separator: &str) -> String {
    let name = format!(r#"<span itemprop="name">{}</span>"#, html_escape(&crumb.label));
    let position = format!(
        r#"<meta itemprop="position" content="{}" />"#,
        crumb.position
    );

    let (item, separator) = match crumb.link.as_deref().filter(|l| !l.is_empty()) {
        Some(link) => (
            format!(
                r#"<a class="breadcrumb-link" href="{}" itemscope itemtype="http://schema.org/Thing" itemprop="item">{}</a>"#,
                html_escape(link),
                name
            ),
            separator,
        ),
        None => (
            format!(
                r#"<span itemscope itemtype="http://schema.org/Thing" itemprop="item">{}</span>"#,
                name
            ),
            "",
        ),
    };

    format!(
        r#"<li itemprop="itemListElement" itemscope itemtype="http://schema.org/ListItem">{}{}{}</li>"#,
        item, position, separator
    )
}

/// Escape HTML special characters.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
