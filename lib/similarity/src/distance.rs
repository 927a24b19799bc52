//! Similarity functions between two categories of a dataset
//!
//! Every function looks only at the features the two categories share
//! ("mutual features"). An unknown category or a degenerate computation
//! yields 0.0, never an error and never NaN or infinity.
//!
//! The `*_comparison` variants return a [`Comparison`] instead, which keeps
//! "no data" apart from "truly dissimilar" for callers who need it.

use affinity_core::{Dataset, Features};
use serde::{Deserialize, Serialize};

/// Why a comparison produced no meaningful score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degenerate {
    /// One or both categories are not in the dataset
    UnknownCategory,
    /// The categories share no features
    NoMutualFeatures,
    /// Every mutual feature holds the same value in both categories
    IdenticalValues,
    /// One side has no variance over the mutual features
    ZeroVariance,
    /// Neither category has any features
    EmptyUnion,
    /// Infinite or NaN values, or sums that overflowed
    NonFiniteValues,
}

/// Outcome of comparing two categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Defined(f64),
    Undefined(Degenerate),
}

impl Comparison {
    /// Numeric score, with undefined outcomes collapsed to 0.0
    #[inline]
    pub fn score(self) -> f64 {
        match self {
            Comparison::Defined(score) => score,
            Comparison::Undefined(_) => 0.0,
        }
    }

    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Comparison::Defined(score) => Some(score),
            Comparison::Undefined(_) => None,
        }
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        matches!(self, Comparison::Defined(_))
    }
}

/// Euclidean-derived similarity: `1 / (1 + Σ(a - b)²)` over mutual features
///
/// # Returns
/// Score in (0.0, 1.0]. 0.0 when there are no mutual features and also when
/// all mutual values are identical, since both give a sum of squares of zero.
pub fn distance_score(dataset: &Dataset, a: &str, b: &str) -> f64 {
    distance_comparison(dataset, a, b).score()
}

pub fn distance_comparison(dataset: &Dataset, a: &str, b: &str) -> Comparison {
    let Some((features_a, features_b)) = lookup_pair(dataset, a, b) else {
        return Comparison::Undefined(Degenerate::UnknownCategory);
    };

    let mut mutual = 0usize;
    let mut sum_of_squares = 0.0f64;
    for (value_a, value_b) in mutual_values(features_a, features_b) {
        mutual += 1;
        sum_of_squares += (value_a - value_b).powi(2);
    }

    if mutual == 0 {
        return Comparison::Undefined(Degenerate::NoMutualFeatures);
    }
    if !sum_of_squares.is_finite() {
        return Comparison::Undefined(Degenerate::NonFiniteValues);
    }
    if sum_of_squares == 0.0 {
        return Comparison::Undefined(Degenerate::IdenticalValues);
    }

    Comparison::Defined(1.0 / (1.0 + sum_of_squares))
}

/// Pearson correlation of the two categories' values over mutual features
///
/// Corrects for one category consistently scoring higher than the other.
///
/// # Returns
/// Score in [-1.0, 1.0]. 0.0 when there are no mutual features or either
/// side has zero variance.
pub fn correlation_score(dataset: &Dataset, a: &str, b: &str) -> f64 {
    correlation_comparison(dataset, a, b).score()
}

pub fn correlation_comparison(dataset: &Dataset, a: &str, b: &str) -> Comparison {
    let Some((features_a, features_b)) = lookup_pair(dataset, a, b) else {
        return Comparison::Undefined(Degenerate::UnknownCategory);
    };

    let mut n = 0usize;
    let mut sum_a = 0.0f64;
    let mut sum_b = 0.0f64;
    let mut sum_sq_a = 0.0f64;
    let mut sum_sq_b = 0.0f64;
    let mut sum_products = 0.0f64;

    for (value_a, value_b) in mutual_values(features_a, features_b) {
        n += 1;
        sum_a += value_a;
        sum_b += value_b;
        sum_sq_a += value_a * value_a;
        sum_sq_b += value_b * value_b;
        sum_products += value_a * value_b;
    }

    if n == 0 {
        return Comparison::Undefined(Degenerate::NoMutualFeatures);
    }

    if ![sum_a, sum_b, sum_sq_a, sum_sq_b, sum_products]
        .iter()
        .all(|sum| sum.is_finite())
    {
        return Comparison::Undefined(Degenerate::NonFiniteValues);
    }

    let n = n as f64;
    let numerator = sum_products - (sum_a * sum_b / n);
    let denominator = ((sum_sq_a - sum_a.powi(2) / n) * (sum_sq_b - sum_b.powi(2) / n)).sqrt();

    // Rounding can push a zero variance slightly negative, making sqrt NaN
    if denominator.is_nan() || denominator <= 0.0 {
        return Comparison::Undefined(Degenerate::ZeroVariance);
    }

    Comparison::Defined((numerator / denominator).clamp(-1.0, 1.0))
}

/// Tanimoto coefficient of the two categories' feature sets
///
/// Only the presence of features matters, not their values.
///
/// # Returns
/// `shared / (count_a + count_b - shared)` in [0.0, 1.0]
pub fn overlap_score(dataset: &Dataset, a: &str, b: &str) -> f64 {
    overlap_comparison(dataset, a, b).score()
}

pub fn overlap_comparison(dataset: &Dataset, a: &str, b: &str) -> Comparison {
    let Some((features_a, features_b)) = lookup_pair(dataset, a, b) else {
        return Comparison::Undefined(Degenerate::UnknownCategory);
    };

    let shared = mutual_values(features_a, features_b).count();
    let union = features_a.len() + features_b.len() - shared;

    if union == 0 {
        return Comparison::Undefined(Degenerate::EmptyUnion);
    }

    Comparison::Defined(shared as f64 / union as f64)
}

fn lookup_pair<'a>(dataset: &'a Dataset, a: &str, b: &str) -> Option<(&'a Features, &'a Features)> {
    Some((dataset.features(a)?, dataset.features(b)?))
}

/// Value pairs for every feature present in both maps, in `a`'s order
fn mutual_values<'a>(a: &'a Features, b: &'a Features) -> impl Iterator<Item = (f64, f64)> + 'a {
    a.iter()
        .filter_map(move |(feature, &value_a)| b.get(feature).map(|&value_b| (value_a, value_b)))
}
