//! Data file loading (news and tips)

use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod source;

pub use source::{load_source, read_source, LoadError, SourceDocument};

pub const DEFAULT_NEWS_FILE: &str = "data/news.json";
pub const DEFAULT_TIPS_FILE: &str = "data/tips.json";

/// Locations of the two data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub news: PathBuf,
    pub tips: PathBuf,
}

impl DataPaths {
    /// Default file layout below `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self { news: data_dir.join(DEFAULT_NEWS_FILE), tips: data_dir.join(DEFAULT_TIPS_FILE) }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

/// Raw documents for one render pass.
#[derive(Debug, Clone)]
pub struct Sources {
    pub news: SourceDocument,
    pub tips: SourceDocument,
}

/// Read both data files. Tips are read before news; a malformed file in
/// either aborts the pass.
pub fn load_sources(paths: &DataPaths) -> Result<Sources> {
    let tips = load_source(&paths.tips)?;
    let news = load_source(&paths.news)?;
    Ok(Sources { news, tips })
}
