//! Normalize → merge → filter → sort
//!
//! A [`Dashboard`] holds the merged collection for one render pass. Each call
//! to [`Dashboard::view`] applies a selection and returns the items ready for
//! rendering together with the option lists a host needs to offer filters.

use crate::domain::{NormalizedItem, OptionStyle, Origin, Scope};
use crate::load::Sources;
use serde::Serialize;

pub mod filter;
pub mod normalize;
pub mod options;
pub mod sort;

pub use filter::{filter_items, Selection};
pub use normalize::{merge, normalize};
pub use options::FilterOptions;
pub use sort::sort_by_date_desc;

/// Item counts per origin, before any filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OriginCounts {
    pub news: usize,
    pub tips: usize,
}

impl OriginCounts {
    pub fn get(&self, origin: Origin) -> usize {
        match origin {
            Origin::News => self.news,
            Origin::Tips => self.tips,
        }
    }
}

/// Merged, normalized items of one render pass.
#[derive(Debug, Clone)]
pub struct Dashboard {
    items: Vec<NormalizedItem>,
    counts: OriginCounts,
}

/// Rendering-ready result of applying a selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Items in scope before filtering.
    pub total: usize,
    pub counts: OriginCounts,
    pub options: FilterOptions,
    pub items: Vec<NormalizedItem>,
}

impl Dashboard {
    pub fn from_sources(sources: Sources) -> Self {
        let news = normalize(sources.news, Origin::News);
        let tips = normalize(sources.tips, Origin::Tips);
        let counts = OriginCounts { news: news.len(), tips: tips.len() };
        tracing::debug!("Normalized {} news and {} tips items", counts.news, counts.tips);
        Self { items: merge(news, tips), counts }
    }

    /// Merged items in merge order (news first).
    pub fn items(&self) -> &[NormalizedItem] {
        &self.items
    }

    pub fn counts(&self) -> OriginCounts {
        self.counts
    }

    /// Items belonging to `scope`, unfiltered and in merge order.
    pub fn scoped(&self, scope: Scope) -> Vec<NormalizedItem> {
        self.items.iter().filter(|item| scope.includes(item.origin)).cloned().collect()
    }

    /// Options for `scope`, independent of any selection.
    pub fn options(&self, scope: Scope, style: OptionStyle) -> FilterOptions {
        FilterOptions::collect(&self.scoped(scope), style)
    }

    pub fn view(&self, selection: &Selection, scope: Scope, style: OptionStyle) -> DashboardView {
        let candidates = self.scoped(scope);
        let total = candidates.len();
        let options = FilterOptions::collect(&candidates, style);

        let mut items = filter_items(candidates, selection, style);
        sort_by_date_desc(&mut items);
        tracing::debug!("Selection kept {} of {} items", items.len(), total);

        DashboardView { total, counts: self.counts, options, items }
    }
}
