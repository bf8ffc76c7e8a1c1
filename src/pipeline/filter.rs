//! Inclusion filtering on tag attributes

use crate::domain::{Attribute, NormalizedItem, OptionStyle, PLACEHOLDER};
use std::collections::{BTreeMap, BTreeSet};

/// Selected values per attribute. An attribute with no selected values is
/// not engaged and lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeMap<Attribute, BTreeSet<String>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add values for `attribute` exactly as given; `""` is a selectable value.
    pub fn select<I, S>(&mut self, attribute: Attribute, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.selected.entry(attribute).or_default();
        entry.extend(values.into_iter().map(Into::<String>::into));
        self
    }

    pub fn with<I, S>(mut self, attribute: Attribute, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select(attribute, values);
        self
    }

    pub fn values(&self, attribute: Attribute) -> Option<&BTreeSet<String>> {
        self.selected.get(&attribute).filter(|set| !set.is_empty())
    }

    pub fn is_engaged(&self, attribute: Attribute) -> bool {
        self.values(attribute).is_some()
    }

    pub fn is_empty(&self) -> bool {
        Attribute::ALL.iter().all(|&attr| !self.is_engaged(attr))
    }

    /// Drop `attribute` from the selection.
    pub fn clear(&mut self, attribute: Attribute) {
        self.selected.remove(&attribute);
    }

    /// True when `item` satisfies every engaged attribute.
    pub fn matches(&self, item: &NormalizedItem, style: OptionStyle) -> bool {
        self.selected.iter().all(|(&attribute, wanted)| {
            if wanted.is_empty() {
                return true;
            }
            let value = item.filter_value(attribute, style);
            value == PLACEHOLDER || wanted.contains(value)
        })
    }
}

/// Keep items accepted by `selection`, preserving order.
pub fn filter_items(
    items: Vec<NormalizedItem>,
    selection: &Selection,
    style: OptionStyle,
) -> Vec<NormalizedItem> {
    if selection.is_empty() {
        return items;
    }
    items.into_iter().filter(|item| selection.matches(item, style)).collect()
}
