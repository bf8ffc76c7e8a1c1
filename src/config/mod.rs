//! Configuration loading and merging
//!
//! Handles loading from config files and CLI arguments with proper
//! precedence (CLI > File > Defaults).

use crate::domain::{OutputFormat, Scope};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides, Settings};

/// File-level configuration. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub news_file: Option<PathBuf>,
    pub tips_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub scope: Option<Scope>,
    pub origin_prefixed_options: bool,
    pub filters: FilterConfig,
}

/// Default selections, applied when the command line selects nothing for
/// that attribute.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(rename = "type", deserialize_with = "string_or_list")]
    pub origin: Vec<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub category: Vec<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub layer: Vec<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub region: Vec<String>,
    #[serde(alias = "source-type", deserialize_with = "string_or_list")]
    pub source_type: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

/// Accept `"a,b"` or `["a", "b"]`. Values are kept exactly; only the empty
/// tokens of a comma-separated string are dropped.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => {
            s.split(',').filter(|part| !part.is_empty()).map(str::to_string).collect()
        }
        StringOrList::Many(list) => list,
    })
}
