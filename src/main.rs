//! intel-dashboard: Filter, sort and render News and Tips items
//!
//! Reads two JSON data files and renders their articles as cards, with
//! category, layer, region and source type filters.

use anyhow::Result;

fn main() -> Result<()> {
    intel_dashboard::cli::run()
}
