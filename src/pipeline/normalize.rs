//! Raw article normalization and merging

use crate::domain::{NormalizedItem, Origin, RawArticle, PLACEHOLDER};
use crate::load::SourceDocument;

/// Map every article of `doc` to a [`NormalizedItem`] tagged with `origin`,
/// keeping input order.
pub fn normalize(doc: SourceDocument, origin: Origin) -> Vec<NormalizedItem> {
    doc.into_articles().into_iter().map(|article| normalize_article(article, origin)).collect()
}

pub fn normalize_article(article: RawArticle, origin: Origin) -> NormalizedItem {
    let category = article.category.unwrap_or_else(placeholder);
    let layer = article.layer.unwrap_or_else(placeholder);

    NormalizedItem {
        origin,
        title: article.title.unwrap_or_default(),
        description: first_non_empty(article.summary, article.contents),
        url: article.url.unwrap_or_default(),
        source: article.source.unwrap_or_default(),
        date: first_non_empty(article.pub_date, article.date),
        category_key: prefixed(origin, &category),
        layer_key: prefixed(origin, &layer),
        category,
        layer,
        region: article.region.unwrap_or_else(placeholder),
        source_type: article.source_type.unwrap_or_else(placeholder),
    }
}

/// News followed by tips. Order within each group is preserved.
pub fn merge(news: Vec<NormalizedItem>, tips: Vec<NormalizedItem>) -> Vec<NormalizedItem> {
    let mut merged = news;
    merged.extend(tips);
    merged
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn first_non_empty(preferred: Option<String>, fallback: Option<String>) -> String {
    preferred.filter(|s| !s.is_empty()).or(fallback).unwrap_or_default()
}

fn prefixed(origin: Origin, value: &str) -> String {
    if value == PLACEHOLDER {
        return value.to_string();
    }
    format!("{} - {}", origin, value)
}
