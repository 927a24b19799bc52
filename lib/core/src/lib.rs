//! # Affinity Core
//!
//! Core data model for the Affinity collaborative-filtering engine.
//!
//! - [`Dataset`] - sparse category → feature → value observations
//! - [`SharedDataset`] - reader/writer guarded dataset for callers that mutate between queries
//! - [`CategoryScore`] / [`FeatureScore`] - records returned by ranking queries
//! - [`Error`] - failures surfaced to callers (only predictions can fail)
//!
//! ## Example
//!
//! ```rust
//! use affinity_core::Dataset;
//!
//! let mut dataset = Dataset::new();
//! dataset.set_value("Toby", "Snakes on a Plane", 4.5);
//! dataset.set_value("Toby", "Superman Returns", 4.0);
//!
//! assert_eq!(dataset.get_value("Toby", "Superman Returns"), 4.0);
//! // Missing entries read as zero and are never inserted
//! assert_eq!(dataset.get_value("Toby", "Just My Luck"), 0.0);
//! assert!(!dataset.contains_feature("Toby", "Just My Luck"));
//! ```

pub mod dataset;
pub mod error;
pub mod score;
pub mod shared;

pub use dataset::{Dataset, Features};
pub use error::{Error, Result};
pub use score::{CategoryScore, FeatureScore, Scored};
pub use shared::SharedDataset;
