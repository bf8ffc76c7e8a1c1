//! Render command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

use super::utils::{resolve_settings, SourceArgs};
use crate::domain::{Attribute, OutputFormat};
use crate::load::load_sources;
use crate::pipeline::Dashboard;
use crate::render::{render, RenderOptions};

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format: text, html, json or jsonl
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Show only these origins: News, Tips (repeatable or comma-separated)
    #[arg(long = "type", value_name = "ORIGINS", value_delimiter = ',', num_args = 1..)]
    pub origin: Vec<String>,

    /// Include only these categories (repeatable or comma-separated)
    #[arg(long, value_name = "VALUES", value_delimiter = ',', num_args = 1..)]
    pub category: Vec<String>,

    /// Include only these layers (repeatable or comma-separated)
    #[arg(long, value_name = "VALUES", value_delimiter = ',', num_args = 1..)]
    pub layer: Vec<String>,

    /// Include only these regions (repeatable or comma-separated)
    #[arg(long, value_name = "VALUES", value_delimiter = ',', num_args = 1..)]
    pub region: Vec<String>,

    /// Include only these source types (repeatable or comma-separated)
    #[arg(long, value_name = "VALUES", value_delimiter = ',', num_args = 1..)]
    pub source_type: Vec<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Omit the generated_at timestamp from JSON output
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let filters = vec![
        (Attribute::Type, args.origin),
        (Attribute::Category, args.category),
        (Attribute::Layer, args.layer),
        (Attribute::Region, args.region),
        (Attribute::SourceType, args.source_type),
    ];
    let settings = resolve_settings(&args.source, args.format.as_deref(), filters)?;

    let sources = load_sources(&settings.paths)?;
    let dashboard = Dashboard::from_sources(sources);
    let view = dashboard.view(&settings.selection, settings.scope, settings.style);

    let color = settings.format == OutputFormat::Text
        && !args.no_color
        && args.output.is_none()
        && std::io::stdout().is_terminal();
    let options = RenderOptions { color, include_timestamp: !args.no_timestamp };
    let rendered = render(&view, settings.format, &options)?;

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed creating output directory: {}", parent.display())
                })?;
            }
            fs::write(&path, rendered)
                .with_context(|| format!("Failed writing output file: {}", path.display()))?;
            tracing::debug!("Wrote {} items to {}", view.items.len(), path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
