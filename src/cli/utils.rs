//! Shared CLI utilities.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides, Settings};
use crate::domain::{Attribute, OutputFormat, Scope};

/// Where the data files and config come from. Shared by every subcommand.
#[derive(Args)]
pub struct SourceArgs {
    /// Directory containing data/news.json and data/tips.json
    #[arg(short = 'd', long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// News data file (overrides --data-dir)
    #[arg(long, value_name = "FILE")]
    pub news: Option<PathBuf>,

    /// Tips data file (overrides --data-dir)
    #[arg(long, value_name = "FILE")]
    pub tips: Option<PathBuf>,

    /// Path to config file (intel-dashboard.toml or dashboard.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Which items to show: all, news or tips
    #[arg(short = 's', long, value_name = "SCOPE")]
    pub scope: Option<String>,

    /// Key category and layer options by origin ("News - Finance")
    #[arg(long)]
    pub origin_prefixed: bool,
}

/// Drop the empty tokens a comma split leaves behind (`"a,,b"`). Other values
/// are kept byte for byte so they match option values exactly.
pub fn clean_values(values: &[String]) -> Vec<String> {
    values.iter().filter(|v| !v.is_empty()).cloned().collect()
}

/// Load the config file and merge `source` plus any extra overrides over it.
pub fn resolve_settings(
    source: &SourceArgs,
    format: Option<&str>,
    filters: Vec<(Attribute, Vec<String>)>,
) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, source.config.as_deref())?;

    let mut overrides = CliOverrides {
        data_dir: source.data_dir.clone(),
        news_file: source.news.clone(),
        tips_file: source.tips.clone(),
        format: format.map(str::parse::<OutputFormat>).transpose()?,
        scope: source.scope.as_deref().map(str::parse::<Scope>).transpose()?,
        origin_prefixed: source.origin_prefixed,
        ..CliOverrides::default()
    };
    for (attribute, values) in filters {
        overrides.filters.insert(attribute, clean_values(&values));
    }

    Ok(merge_cli_with_config(overrides, config))
}
