//! intel-dashboard: filterable News and Tips dashboard
//!
//! Loads `data/news.json` and `data/tips.json`, normalizes their articles into
//! one item shape, applies tag filters and renders the result newest-first.

pub mod cli;
pub mod config;
pub mod domain;
pub mod load;
pub mod pipeline;
pub mod render;
