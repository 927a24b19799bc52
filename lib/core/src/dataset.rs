//! Sparse category → feature → value store
//!
//! A [`Dataset`] is the only state the engine reads. Missing categories and
//! features are not errors: every lookup degrades to an empty result or 0.0,
//! and no lookup ever inserts anything.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Feature values of a single category, keyed by feature name
pub type Features = BTreeMap<String, f64>;

/// Observations of numeric feature values per named category
///
/// Categories and features iterate in lexicographic order of their names,
/// so every ranking computed from the same dataset is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    categories: BTreeMap<String, Features>,
}

impl Dataset {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known categories
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// False when the category itself is unknown
    pub fn contains_feature(&self, category: &str, feature: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|features| features.contains_key(feature))
    }

    /// Register a category with no features. Does nothing if it already exists.
    pub fn add_category(&mut self, category: &str) {
        if !self.categories.contains_key(category) {
            self.categories.insert(category.to_string(), Features::new());
        }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    /// Feature names of a category, empty if the category is unknown
    pub fn feature_names<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|features| features.keys().map(String::as_str))
    }

    /// Number of features recorded for a category, 0 if unknown
    pub fn feature_count(&self, category: &str) -> usize {
        self.categories.get(category).map_or(0, Features::len)
    }

    /// Read-only view of a category's feature values
    pub fn features(&self, category: &str) -> Option<&Features> {
        self.categories.get(category)
    }

    /// Store `value` for `feature` in `category`, creating either as needed.
    /// An existing value is overwritten.
    pub fn set_value(&mut self, category: &str, feature: &str, value: f64) {
        self.add_category(category);

        if let Some(features) = self.categories.get_mut(category) {
            match features.get_mut(feature) {
                Some(slot) => *slot = value,
                None => {
                    features.insert(feature.to_string(), value);
                }
            }
        }
    }

    /// Value of `feature` in `category`, or 0.0 if either is missing
    pub fn get_value(&self, category: &str, feature: &str) -> f64 {
        self.categories
            .get(category)
            .and_then(|features| features.get(feature))
            .copied()
            .unwrap_or(0.0)
    }

    /// Features present in both categories, in `a`'s iteration order
    pub fn mutual_features<'a>(&'a self, a: &str, b: &str) -> Vec<&'a str> {
        match (self.categories.get(a), self.categories.get(b)) {
            (Some(features_a), Some(features_b)) => features_a
                .keys()
                .filter(|feature| features_b.contains_key(feature.as_str()))
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl<C, F> Extend<(C, F, f64)> for Dataset
where
    C: AsRef<str>,
    F: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (C, F, f64)>>(&mut self, iter: I) {
        for (category, feature, value) in iter {
            self.set_value(category.as_ref(), feature.as_ref(), value);
        }
    }
}

impl<C, F> FromIterator<(C, F, f64)> for Dataset
where
    C: AsRef<str>,
    F: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (C, F, f64)>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        dataset.extend(iter);
        dataset
    }
}
