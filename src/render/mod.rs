//! Output rendering (terminal text, HTML cards, JSON, JSONL)

use crate::domain::OutputFormat;
use crate::pipeline::DashboardView;
use anyhow::Result;

pub mod html;
pub mod json;
pub mod text;

pub use html::render_html;
pub use json::{render_json, render_jsonl};
pub use text::{render_text, TextOptions};

/// Presentation switches that only some formats use.
pub struct RenderOptions {
    pub color: bool,
    pub include_timestamp: bool,
}

pub fn render(view: &DashboardView, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view, &TextOptions { color: options.color })),
        OutputFormat::Html => Ok(render_html(view)),
        OutputFormat::Json => render_json(view, options.include_timestamp),
        OutputFormat::Jsonl => render_jsonl(view),
    }
}
