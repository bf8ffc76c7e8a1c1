//! Newest-first ordering

use crate::domain::NormalizedItem;

/// Order by the `date` string, descending. Dates are compared as plain
/// strings, so mixed formats ("2024-1-2" vs "2024-01-10") do not sort
/// chronologically. The sort is stable: equal dates keep their prior order.
pub fn sort_by_date_desc(items: &mut [NormalizedItem]) {
    items.sort_by(|a, b| b.date.cmp(&a.date));
}
