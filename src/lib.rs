//! # Affinity
//!
//! Collaborative filtering over sparse category → feature → value data.
//!
//! Affinity scores how alike two categories (critics, users, baskets) are
//! from the features they share, then uses those scores to rank similar
//! categories, recommend unseen features, and predict missing values.
//!
//! ## Quick Start
//!
//! ```rust
//! use affinity::prelude::*;
//!
//! let mut dataset = Dataset::new();
//! dataset.set_value("Lisa Rose", "Snakes on a Plane", 3.5);
//! dataset.set_value("Lisa Rose", "Superman Returns", 3.5);
//! dataset.set_value("Lisa Rose", "You, Me and Dupree", 2.5);
//! dataset.set_value("Lisa Rose", "The Night Listener", 3.0);
//! dataset.set_value("Toby", "Snakes on a Plane", 4.5);
//! dataset.set_value("Toby", "Superman Returns", 4.0);
//! dataset.set_value("Toby", "You, Me and Dupree", 1.0);
//!
//! let recommender = Recommender::new(&dataset);
//!
//! // Which categories are most like Toby?
//! let similar = recommender.top_similar_categories("Toby", 3, &Metric::Correlation);
//! assert_eq!(similar[0].name, "Lisa Rose");
//!
//! // What would Toby think of a film only Lisa Rose has seen?
//! let predicted = recommender.predict_value("Toby", "The Night Listener", &Metric::Correlation)?;
//! assert!((predicted - 3.0).abs() < 1e-9);
//! # Ok::<(), affinity::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - [`affinity-core`](https://docs.rs/affinity-core) - Dataset, score records, errors
//! - [`affinity-similarity`](https://docs.rs/affinity-similarity) - Metrics and the ranking layer
//!
//! ## Features
//!
//! - **Three metrics**: Euclidean-derived distance, Pearson correlation, Tanimoto overlap
//! - **Custom metrics**: any `Fn(&Dataset, &str, &str) -> f64`
//! - **Explicit degenerate results**: [`Comparison`] tells "no data" apart from "dissimilar"
//! - **Safe predictions**: no NaN; a missing prediction is an [`Error::NoPrediction`]

// Re-export core types
pub use affinity_core::{
    CategoryScore, Dataset, Error, FeatureScore, Features, Result, Scored, SharedDataset,
};

// Re-export similarity
pub use affinity_similarity::{
    Comparison, Degenerate, Metric, ParseMetricError, Recommender, RecommenderConfig,
    SimilarityMetric,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CategoryScore, Comparison, Dataset, Error, FeatureScore, Metric, Recommender,
        RecommenderConfig, Result, SharedDataset, SimilarityMetric,
    };
}

/// Similarity functions usable without a [`Recommender`]
pub mod distance {
    pub use affinity_similarity::distance::{
        correlation_comparison, correlation_score, distance_comparison, distance_score,
        overlap_comparison, overlap_score,
    };
}
