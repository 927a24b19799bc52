//! Pluggable similarity metrics
//!
//! The ranking layer accepts anything implementing [`SimilarityMetric`]:
//! one of the built-in [`Metric`]s, a closure with the same shape, or a
//! custom type.

use crate::distance::{
    correlation_comparison, correlation_score, distance_comparison, distance_score,
    overlap_comparison, overlap_score, Comparison,
};
use affinity_core::Dataset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scores how alike two categories of a dataset are
///
/// Built-in metrics are symmetric, but the ranking layer always calls
/// `score(dataset, query, other)` and never assumes symmetry.
pub trait SimilarityMetric {
    fn score(&self, dataset: &Dataset, a: &str, b: &str) -> f64;
}

impl<F> SimilarityMetric for F
where
    F: Fn(&Dataset, &str, &str) -> f64,
{
    fn score(&self, dataset: &Dataset, a: &str, b: &str) -> f64 {
        self(dataset, a, b)
    }
}

/// The built-in metrics
///
/// - `Distance` groups categories by the magnitude of their values.
/// - `Correlation` corrects for categories that rate everything higher or lower.
/// - `Overlap` only looks at which features occur, useful for binary data.
///
/// A category that bought 1 egg, 1 flour and 1 sugar is closer by `Distance`
/// to one that bought 1 egg, 1 vodka and 1 energy drink than to one that
/// bought 100 of each baking item; `Correlation` and `Overlap` say otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Distance,
    Correlation,
    Overlap,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Distance, Metric::Correlation, Metric::Overlap];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Correlation => "correlation",
            Metric::Overlap => "overlap",
        }
    }

    /// Compare two categories, keeping degenerate outcomes distinguishable
    pub fn compare(&self, dataset: &Dataset, a: &str, b: &str) -> Comparison {
        match self {
            Metric::Distance => distance_comparison(dataset, a, b),
            Metric::Correlation => correlation_comparison(dataset, a, b),
            Metric::Overlap => overlap_comparison(dataset, a, b),
        }
    }
}

impl SimilarityMetric for Metric {
    fn score(&self, dataset: &Dataset, a: &str, b: &str) -> f64 {
        match self {
            Metric::Distance => distance_score(dataset, a, b),
            Metric::Correlation => correlation_score(dataset, a, b),
            Metric::Overlap => overlap_score(dataset, a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown similarity metric: {0}")]
pub struct ParseMetricError(pub String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" | "euclidean" => Ok(Metric::Distance),
            "correlation" | "pearson" => Ok(Metric::Correlation),
            "overlap" | "tanimoto" => Ok(Metric::Overlap),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}
