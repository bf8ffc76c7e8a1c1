//! Terminal card rendering

use crate::domain::{Attribute, NormalizedItem};
use crate::pipeline::DashboardView;
use console::Style;
use unicode_width::UnicodeWidthStr;

/// Card width used to right-align the date after the title.
const CARD_WIDTH: usize = 80;

pub struct TextOptions {
    pub color: bool,
}

pub fn render_text(view: &DashboardView, options: &TextOptions) -> String {
    let bold = Style::new().bold().force_styling(options.color);
    let mut out = format!("{}\n", bold.apply_to(format!("Showing {} items", view.items.len())));
    out.push_str(&"-".repeat(CARD_WIDTH));
    out.push('\n');

    if view.items.is_empty() {
        out.push_str("No items match the selected filters.\n");
        return out;
    }

    for item in &view.items {
        out.push_str(&render_card(item, options));
        out.push('\n');
    }
    out
}

pub fn render_card(item: &NormalizedItem, options: &TextOptions) -> String {
    let bold = Style::new().bold().force_styling(options.color);
    let dim = Style::new().dim().force_styling(options.color);

    let title = if item.title.is_empty() { "No Title" } else { item.title.as_str() };
    let gap = CARD_WIDTH.saturating_sub(title.width() + item.date.width()).max(2);
    let mut out = format!(
        "{}{}{}\n",
        bold.apply_to(title),
        " ".repeat(gap),
        dim.apply_to(&item.date)
    );

    if !item.description.is_empty() {
        out.push_str(&item.description);
        out.push('\n');
    }
    if !item.url.is_empty() {
        out.push_str(&format!("Source: {}\n", item.url));
    }

    let tags: Vec<String> = item
        .tags()
        .into_iter()
        .map(|(attr, value)| {
            tag_style(attr).force_styling(options.color).apply_to(format!("[{}]", value)).to_string()
        })
        .collect();
    if !tags.is_empty() {
        out.push_str(&tags.join(" "));
        out.push('\n');
    }
    out
}

fn tag_style(attribute: Attribute) -> Style {
    match attribute {
        Attribute::Type => Style::new().cyan(),
        Attribute::Category => Style::new().magenta(),
        Attribute::Layer => Style::new().yellow(),
        Attribute::Region => Style::new().green(),
        Attribute::SourceType => Style::new().red(),
    }
}
