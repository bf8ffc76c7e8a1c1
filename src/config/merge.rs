//! Merge CLI arguments over file configuration

use super::Config;
use crate::domain::{Attribute, OptionStyle, OutputFormat, Scope};
use crate::load::{DataPaths, DEFAULT_NEWS_FILE, DEFAULT_TIPS_FILE};
use crate::pipeline::Selection;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Values given on the command line. `None` / empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub news_file: Option<PathBuf>,
    pub tips_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub scope: Option<Scope>,
    pub origin_prefixed: bool,
    pub filters: BTreeMap<Attribute, Vec<String>>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub paths: DataPaths,
    pub format: OutputFormat,
    pub scope: Scope,
    pub style: OptionStyle,
    pub selection: Selection,
}

pub fn merge_cli_with_config(cli: CliOverrides, config: Config) -> Settings {
    let data_dir = cli.data_dir.or(config.data_dir).unwrap_or_else(|| PathBuf::from("."));
    let news = cli
        .news_file
        .or(config.news_file.map(|p| data_dir.join(p)))
        .unwrap_or_else(|| data_dir.join(DEFAULT_NEWS_FILE));
    let tips = cli
        .tips_file
        .or(config.tips_file.map(|p| data_dir.join(p)))
        .unwrap_or_else(|| data_dir.join(DEFAULT_TIPS_FILE));

    let style = if cli.origin_prefixed || config.origin_prefixed_options {
        OptionStyle::OriginPrefixed
    } else {
        OptionStyle::Plain
    };

    let file_filters = config.filters;
    let mut selection = Selection::new();
    for attribute in Attribute::ALL {
        let from_cli = cli.filters.get(&attribute).filter(|values| !values.is_empty());
        let values = match from_cli {
            Some(values) => values.clone(),
            None => match attribute {
                Attribute::Type => file_filters.origin.clone(),
                Attribute::Category => file_filters.category.clone(),
                Attribute::Layer => file_filters.layer.clone(),
                Attribute::Region => file_filters.region.clone(),
                Attribute::SourceType => file_filters.source_type.clone(),
            },
        };
        selection.select(attribute, values);
    }

    Settings {
        paths: DataPaths { news, tips },
        format: cli.format.or(config.format).unwrap_or_default(),
        scope: cli.scope.or(config.scope).unwrap_or_default(),
        style,
        selection,
    }
}
