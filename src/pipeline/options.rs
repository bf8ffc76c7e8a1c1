//! Filter option lists

use crate::domain::{Attribute, NormalizedItem, OptionStyle, PLACEHOLDER};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Sorted distinct values per attribute, placeholder excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterOptions {
    values: BTreeMap<Attribute, Vec<String>>,
}

impl FilterOptions {
    /// Gather options from `items`. The result does not depend on any
    /// active selection; callers pass the unfiltered collection.
    pub fn collect(items: &[NormalizedItem], style: OptionStyle) -> Self {
        let mut sets: BTreeMap<Attribute, BTreeSet<&str>> =
            Attribute::ALL.iter().map(|&attr| (attr, BTreeSet::new())).collect();

        for item in items {
            for (&attribute, set) in sets.iter_mut() {
                let value = item.filter_value(attribute, style);
                if value != PLACEHOLDER {
                    set.insert(value);
                }
            }
        }

        let values = sets
            .into_iter()
            .map(|(attr, set)| (attr, set.into_iter().map(str::to_string).collect()))
            .collect();
        Self { values }
    }

    pub fn get(&self, attribute: Attribute) -> &[String] {
        self.values.get(&attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attributes that have at least one option, in display order.
    pub fn available(&self) -> Vec<(Attribute, &[String])> {
        Attribute::ALL
            .iter()
            .map(|&attr| (attr, self.get(attr)))
            .filter(|(_, values)| !values.is_empty())
            .collect()
    }
}
