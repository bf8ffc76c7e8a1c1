//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::utils::{resolve_settings, SourceArgs};
use crate::load::{read_source, SourceDocument};

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let settings = resolve_settings(&args.source, None, Vec::new())?;

    for (label, path) in [("News", &settings.paths.news), ("Tips", &settings.paths.tips)] {
        let doc = read_source(path)?;
        println!("{}", describe(label, path, doc.as_ref()));
    }

    Ok(())
}

/// `doc` is `None` when the file does not exist.
fn describe(label: &str, path: &Path, doc: Option<&SourceDocument>) -> String {
    let Some(doc) = doc else {
        return format!("{}: {} (missing, treated as empty)", label, path.display());
    };
    let metadata_keys = doc.metadata().map(|m| m.len()).unwrap_or(0);
    format!(
        "{}: {} ({}, {} articles, {} metadata keys)",
        label,
        path.display(),
        doc.shape(),
        doc.articles().len(),
        metadata_keys
    )
}
