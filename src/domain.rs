//! Core data types shared across the loader, pipeline and renderers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Marker stored in a tag field when the source article did not carry it.
pub const PLACEHOLDER: &str = "—";

/// Article record as it appears in a data file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub layer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contents: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pub_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

/// Accept strings as-is, stringify numbers and booleans, and treat `null`,
/// arrays and objects as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Which data file an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Origin {
    News,
    Tips,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::News => "News",
            Origin::Tips => "Tips",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform item shape produced by normalization. Every field is always
/// present; absent tags hold [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    #[serde(rename = "type")]
    pub origin: Origin,
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub date: String,
    pub category: String,
    pub layer: String,
    pub region: String,
    pub source_type: String,
    /// `"{origin} - {category}"`, used to tell apart News and Tips options
    /// that share a category name.
    pub category_key: String,
    pub layer_key: String,
}

impl NormalizedItem {
    /// Display value of a filter attribute.
    pub fn value(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Type => self.origin.as_str(),
            Attribute::Category => &self.category,
            Attribute::Layer => &self.layer,
            Attribute::Region => &self.region,
            Attribute::SourceType => &self.source_type,
        }
    }

    /// Value used for option lists and selection matching under `style`.
    pub fn filter_value(&self, attribute: Attribute, style: OptionStyle) -> &str {
        match (style, attribute) {
            (OptionStyle::OriginPrefixed, Attribute::Category) => &self.category_key,
            (OptionStyle::OriginPrefixed, Attribute::Layer) => &self.layer_key,
            _ => self.value(attribute),
        }
    }

    /// Tags shown on a card, in display order, skipping placeholder and empty values.
    pub fn tags(&self) -> Vec<(Attribute, &str)> {
        Attribute::TAGS
            .iter()
            .map(|&attr| (attr, self.value(attr)))
            .filter(|(_, value)| is_present(value))
            .collect()
    }
}

/// True for a real, non-empty value.
pub fn is_present(value: &str) -> bool {
    !value.is_empty() && value != PLACEHOLDER
}

/// An attribute the dashboard offers multi-value inclusion filtering on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Type,
    Category,
    Layer,
    Region,
    SourceType,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Type,
        Attribute::Category,
        Attribute::Layer,
        Attribute::Region,
        Attribute::SourceType,
    ];

    /// Attributes rendered as card tags.
    pub const TAGS: [Attribute; 4] =
        [Attribute::Category, Attribute::Layer, Attribute::Region, Attribute::SourceType];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Type => "Type",
            Attribute::Category => "Category",
            Attribute::Layer => "Layer",
            Attribute::Region => "Region",
            Attribute::SourceType => "Source Type",
        }
    }

    /// CSS-friendly slug, also the CLI flag name.
    pub fn slug(&self) -> &'static str {
        match self {
            Attribute::Type => "type",
            Attribute::Category => "category",
            Attribute::Layer => "layer",
            Attribute::Region => "region",
            Attribute::SourceType => "source-type",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Attribute {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "type" | "origin" => Ok(Attribute::Type),
            "category" => Ok(Attribute::Category),
            "layer" => Ok(Attribute::Layer),
            "region" => Ok(Attribute::Region),
            "source-type" | "source_type" | "sourcetype" => Ok(Attribute::SourceType),
            other => anyhow::bail!(
                "Invalid filter attribute: '{}'. Use type, category, layer, region or source-type.",
                other
            ),
        }
    }
}

/// How category and layer values are keyed in option lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionStyle {
    /// Raw display values.
    #[default]
    Plain,
    /// `"News - Finance"` style keys, so both origins can list the same name.
    OriginPrefixed,
}

/// Which slice of the merged collection a view covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    All,
    News,
    Tips,
}

impl Scope {
    pub fn includes(&self, origin: Origin) -> bool {
        match self {
            Scope::All => true,
            Scope::News => origin == Origin::News,
            Scope::Tips => origin == Origin::Tips,
        }
    }
}

impl FromStr for Scope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Scope::All),
            "news" => Ok(Scope::News),
            "tips" => Ok(Scope::Tips),
            other => anyhow::bail!("Invalid scope: '{}'. Use all, news or tips.", other),
        }
    }
}

/// Output format of the `render` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
    Jsonl,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            other => {
                anyhow::bail!("Invalid format: '{}'. Use text, html, json or jsonl.", other)
            }
        }
    }
}
