//! # Affinity Similarity
//!
//! Similarity metrics and top-N ranking for collaborative filtering.
//!
//! Given a [`Dataset`](affinity_core::Dataset) of category → feature → value
//! observations, this crate answers three kinds of query:
//!
//! - which categories are most like a given one,
//! - which features a category lacks but would likely value highly,
//! - which categories value a feature most, optionally filling in predictions.
//!
//! ## Metrics
//!
//! - **Distance**: `1 / (1 + Σ(a - b)²)` over mutual features
//! - **Correlation**: Pearson correlation over mutual features
//! - **Overlap**: Tanimoto coefficient of the two feature sets
//!
//! Any closure `Fn(&Dataset, &str, &str) -> f64` can stand in for a metric.
//!
//! ## Example
//!
//! ```rust
//! use affinity_core::Dataset;
//! use affinity_similarity::{Metric, Recommender};
//!
//! let mut dataset = Dataset::new();
//! dataset.set_value("Lisa Rose", "Snakes on a Plane", 3.5);
//! dataset.set_value("Lisa Rose", "Superman Returns", 3.5);
//! dataset.set_value("Lisa Rose", "The Night Listener", 3.0);
//! dataset.set_value("Toby", "Snakes on a Plane", 4.5);
//! dataset.set_value("Toby", "Superman Returns", 4.0);
//!
//! let recommender = Recommender::new(&dataset);
//! let similar = recommender.top_similar_categories("Toby", 3, &Metric::Distance);
//! assert_eq!(similar[0].name, "Lisa Rose");
//!
//! let features = recommender.top_recommended_features("Toby", 3, &Metric::Distance);
//! assert_eq!(features[0].name, "The Night Listener");
//! ```

pub mod distance;
pub mod metric;
pub mod rank;

pub use distance::{
    correlation_comparison, correlation_score, distance_comparison, distance_score,
    overlap_comparison, overlap_score, Comparison, Degenerate,
};
pub use metric::{Metric, ParseMetricError, SimilarityMetric};
pub use rank::{Recommender, RecommenderConfig};
