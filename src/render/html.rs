//! HTML card fragments

use crate::domain::NormalizedItem;
use crate::pipeline::DashboardView;

/// Render every item of `view` as a `<div class="card">` fragment, preceded
/// by the item count. Markup only; styling is left to the host page.
pub fn render_html(view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<p class=\"count\"><strong>Showing {} items</strong></p>\n",
        view.items.len()
    ));

    if view.items.is_empty() {
        out.push_str("<p class=\"empty\">No items match the selected filters.</p>\n");
        return out;
    }

    for item in &view.items {
        out.push_str(&render_card(item));
    }
    out
}

pub fn render_card(item: &NormalizedItem) -> String {
    let tags: String = item
        .tags()
        .into_iter()
        .map(|(attr, value)| {
            format!("<span class=\"tag tag-{}\">{}</span>", attr.slug(), escape_html(value))
        })
        .collect();
    let url = if item.url.is_empty() { "#" } else { item.url.as_str() };

    format!(
        concat!(
            "<div class=\"card\">\n",
            "  <div class=\"card-title\">\n",
            "    <span class=\"card-title-text\">{title}</span>\n",
            "    <span class=\"card-date\">{date}</span>\n",
            "  </div>\n",
            "  <div class=\"card-body\">\n",
            "    <div class=\"card-description\">{description}</div>\n",
            "    <div class=\"card-url\"><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">Source</a></div>\n",
            "  </div>\n",
            "  <div class=\"card-tags\">{tags}</div>\n",
            "</div>\n"
        ),
        title = escape_html(&item.title),
        date = escape_html(&item.date),
        description = escape_html(&item.description),
        url = escape_html(url),
        tags = tags,
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
