//! Options command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::utils::{resolve_settings, SourceArgs};
use crate::domain::Origin;
use crate::load::load_sources;
use crate::pipeline::Dashboard;

#[derive(Args)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: OptionsArgs) -> Result<()> {
    let settings = resolve_settings(&args.source, None, Vec::new())?;
    let dashboard = Dashboard::from_sources(load_sources(&settings.paths)?);
    let counts = dashboard.counts();
    let options = dashboard.options(settings.scope, settings.style);

    if args.json {
        let doc = json!({ "counts": counts, "options": options });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    for origin in [Origin::News, Origin::Tips] {
        println!("{} ({})", origin, counts.get(origin));
    }

    // Attributes without any values are not offered as filters.
    for (attribute, values) in options.available() {
        println!("{}:", attribute.label());
        for value in values {
            println!("  {}", value);
        }
    }

    Ok(())
}
