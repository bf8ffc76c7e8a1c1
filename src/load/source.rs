//! Reading a single data file

use crate::domain::RawArticle;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed reading data file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed JSON in data file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The two shapes a data file may take.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceDocument {
    /// A top-level array of articles.
    List(Vec<RawArticle>),
    /// An object with an `articles` array and optional `metadata`.
    Document {
        #[serde(default)]
        articles: Vec<RawArticle>,
        #[serde(default)]
        metadata: Map<String, Value>,
    },
}

impl SourceDocument {
    /// Stand-in for a data file that does not exist.
    pub fn empty() -> Self {
        SourceDocument::Document { articles: Vec::new(), metadata: Map::new() }
    }

    pub fn articles(&self) -> &[RawArticle] {
        match self {
            SourceDocument::List(articles) => articles,
            SourceDocument::Document { articles, .. } => articles,
        }
    }

    pub fn into_articles(self) -> Vec<RawArticle> {
        match self {
            SourceDocument::List(articles) => articles,
            SourceDocument::Document { articles, .. } => articles,
        }
    }

    /// Metadata object; list-shaped files have none.
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        match self {
            SourceDocument::List(_) => None,
            SourceDocument::Document { metadata, .. } => Some(metadata),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            SourceDocument::List(_) => "list",
            SourceDocument::Document { .. } => "document",
        }
    }
}

/// Parse a data file. A missing file yields [`SourceDocument::empty`];
/// anything that is not valid JSON of a supported shape is an error.
pub fn load_source(path: &Path) -> Result<SourceDocument, LoadError> {
    Ok(read_source(path)?.unwrap_or_else(|| {
        tracing::debug!("Data file {} not found, using empty set", path.display());
        SourceDocument::empty()
    }))
}

/// Like [`load_source`], but reports a missing file as `None`.
pub fn read_source(path: &Path) -> Result<Option<SourceDocument>, LoadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(LoadError::Io { path: path.to_path_buf(), source }),
    };

    let document = parse_source(&content)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;
    tracing::debug!(
        "Loaded {} articles from {} ({})",
        document.articles().len(),
        path.display(),
        document.shape()
    );
    Ok(Some(document))
}

pub fn parse_source(content: &str) -> Result<SourceDocument, serde_json::Error> {
    // Syntax errors are reported before shape errors.
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(_) => Ok(SourceDocument::List(serde_json::from_value(value)?)),
        Value::Object(mut map) => {
            let articles = match map.remove("articles") {
                Some(Value::Null) | None => Vec::new(),
                Some(list) => serde_json::from_value(list)?,
            };
            let metadata = match map.remove("metadata") {
                Some(Value::Object(metadata)) => metadata,
                _ => Map::new(),
            };
            Ok(SourceDocument::Document { articles, metadata })
        }
        other => serde_json::from_value(other),
    }
}
