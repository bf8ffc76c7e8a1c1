//! JSON and JSONL rendering

use crate::pipeline::DashboardView;
use anyhow::Result;
use chrono::Utc;
use serde_json::{Map, Value};

/// Pretty JSON document with counts, options and items.
pub fn render_json(view: &DashboardView, include_timestamp: bool) -> Result<String> {
    let mut doc = Map::new();
    if include_timestamp {
        doc.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    doc.insert("total".to_string(), Value::Number(view.total.into()));
    doc.insert("showing".to_string(), Value::Number(view.items.len().into()));
    doc.insert("counts".to_string(), serde_json::to_value(view.counts)?);
    doc.insert("options".to_string(), serde_json::to_value(&view.options)?);
    doc.insert("items".to_string(), serde_json::to_value(&view.items)?);

    let mut out = serde_json::to_string_pretty(&Value::Object(doc))?;
    out.push('\n');
    Ok(out)
}

/// One item per line.
pub fn render_jsonl(view: &DashboardView) -> Result<String> {
    let mut lines = Vec::with_capacity(view.items.len());
    for item in &view.items {
        lines.push(serde_json::to_string(item)?);
    }
    if lines.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{}\n", lines.join("\n")))
    }
}
