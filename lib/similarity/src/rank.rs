//! Top-N ranking and prediction on top of a similarity metric
//!
//! Every query recomputes from the dataset; nothing is cached between calls.
//! Results are sorted by descending score with a stable sort, so entries with
//! equal scores keep the dataset's iteration order (or first-encounter order
//! for features).

use crate::metric::SimilarityMetric;
use affinity_core::{CategoryScore, Dataset, Error, FeatureScore, Result, Scored};
use ahash::AHashMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::{debug, trace, warn};

/// Tuning for [`Recommender`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// A category only contributes to recommendations and predictions when
    /// its similarity to the query is strictly above this value. Values
    /// below 0.0 are treated as 0.0.
    pub similarity_floor: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            similarity_floor: 0.0,
        }
    }
}

/// Ranks categories and features of a borrowed dataset
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    dataset: &'a Dataset,
    config: RecommenderConfig,
}

impl<'a> Recommender<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_config(dataset, RecommenderConfig::default())
    }

    pub fn with_config(dataset: &'a Dataset, config: RecommenderConfig) -> Self {
        Self { dataset, config }
    }

    /// Copy of this recommender with a different similarity floor
    pub fn with_similarity_floor(&self, floor: f64) -> Self {
        Self::with_config(
            self.dataset,
            RecommenderConfig {
                similarity_floor: floor,
            },
        )
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// The `n` categories most similar to `category`, best first
    ///
    /// The query category itself is never part of the result.
    pub fn top_similar_categories<M>(&self, category: &str, n: usize, metric: &M) -> Vec<CategoryScore>
    where
        M: SimilarityMetric + ?Sized,
    {
        debug!(category, n, "Ranking similar categories");

        let scores: Vec<CategoryScore> = self
            .dataset
            .category_names()
            .filter(|&other| other != category)
            .map(|other| CategoryScore::new(other, self.similarity(metric, category, other)))
            .collect();

        let ranked = top_n(scores, n);
        debug!(category, results = ranked.len(), "Ranked similar categories");
        ranked
    }

    /// The `n` features `category` does not have yet that similar categories
    /// value most, best first
    ///
    /// Each feature is scored with the similarity-weighted average of the
    /// values other categories gave it. Categories whose similarity does not
    /// exceed the floor are left out entirely.
    pub fn top_recommended_features<M>(&self, category: &str, n: usize, metric: &M) -> Vec<FeatureScore>
    where
        M: SimilarityMetric + ?Sized,
    {
        debug!(category, n, "Ranking recommended features");

        let mut weighted = WeightedAverages::default();

        for other in self.dataset.category_names() {
            if other == category {
                continue;
            }

            let similarity = self.similarity(metric, category, other);
            if !self.contributes(similarity) {
                continue;
            }

            for feature in self.dataset.feature_names(other) {
                if self.dataset.contains_feature(category, feature) {
                    continue;
                }
                weighted.add(feature, self.dataset.get_value(other, feature), similarity);
            }
        }

        let scores: Vec<FeatureScore> = weighted
            .into_averages()
            .map(|(feature, average)| FeatureScore::new(feature, average))
            .collect();

        let ranked = top_n(scores, n);
        debug!(category, results = ranked.len(), "Ranked recommended features");
        ranked
    }

    /// The `n` categories that value `feature` most, best first
    ///
    /// Categories holding the feature report their real value. With
    /// `include_predictions`, the others report a predicted value instead;
    /// a category for which no prediction is possible is left out.
    pub fn top_categories_for_feature<M>(
        &self,
        feature: &str,
        n: usize,
        metric: &M,
        include_predictions: bool,
    ) -> Vec<CategoryScore>
    where
        M: SimilarityMetric + ?Sized,
    {
        debug!(feature, n, include_predictions, "Ranking categories for feature");

        let mut scores = Vec::new();
        for category in self.dataset.category_names() {
            if self.dataset.contains_feature(category, feature) {
                scores.push(CategoryScore::new(category, self.dataset.get_value(category, feature)));
            } else if include_predictions {
                match self.predict_value(category, feature, metric) {
                    Ok(predicted) => scores.push(CategoryScore::new(category, predicted)),
                    Err(e) => debug!(category, feature, "Skipping category: {}", e),
                }
            }
        }

        let ranked = top_n(scores, n);
        debug!(feature, results = ranked.len(), "Ranked categories for feature");
        ranked
    }

    /// Predict the value `category` would give `feature`
    ///
    /// Computed as the similarity-weighted average over every other category
    /// holding the feature. A value `category` already holds is ignored.
    ///
    /// # Errors
    /// [`Error::NoPrediction`] when no other category holding the feature has
    /// a similarity above the floor.
    pub fn predict_value<M>(&self, category: &str, feature: &str, metric: &M) -> Result<f64>
    where
        M: SimilarityMetric + ?Sized,
    {
        let mut total = 0.0f64;
        let mut similarity_sum = 0.0f64;

        for other in self.dataset.category_names() {
            if other == category || !self.dataset.contains_feature(other, feature) {
                continue;
            }

            let similarity = self.similarity(metric, category, other);
            if !self.contributes(similarity) {
                continue;
            }

            total += self.dataset.get_value(other, feature) * similarity;
            similarity_sum += similarity;
        }

        if similarity_sum <= 0.0 {
            return Err(Error::no_prediction(category, feature));
        }

        let predicted = total / similarity_sum;
        if !predicted.is_finite() {
            debug!(category, feature, "Weighted average overflowed");
            return Err(Error::no_prediction(category, feature));
        }
        trace!(category, feature, predicted, "Predicted feature value");
        Ok(predicted)
    }

    /// Score a pair, mapping non-finite custom scores to 0.0
    fn similarity<M>(&self, metric: &M, a: &str, b: &str) -> f64
    where
        M: SimilarityMetric + ?Sized,
    {
        let score = metric.score(self.dataset, a, b);
        if !score.is_finite() {
            warn!(a, b, score, "Similarity metric returned a non-finite score, using 0.0");
            return 0.0;
        }
        trace!(a, b, score, "Scored category pair");
        score
    }

    fn contributes(&self, similarity: f64) -> bool {
        similarity > self.config.similarity_floor.max(0.0)
    }
}

/// Running similarity-weighted sums per feature, in first-encounter order
#[derive(Default)]
struct WeightedAverages<'a> {
    slots: AHashMap<&'a str, usize>,
    sums: Vec<(&'a str, f64, f64)>,
}

impl<'a> WeightedAverages<'a> {
    fn add(&mut self, feature: &'a str, value: f64, similarity: f64) {
        let index = match self.slots.get(feature) {
            Some(&index) => index,
            None => {
                self.sums.push((feature, 0.0, 0.0));
                self.slots.insert(feature, self.sums.len() - 1);
                self.sums.len() - 1
            }
        };

        let (_, total, similarity_sum) = &mut self.sums[index];
        *total += value * similarity;
        *similarity_sum += similarity;
    }

    /// Finished averages; features whose sums overflowed are dropped
    fn into_averages(self) -> impl Iterator<Item = (&'a str, f64)> {
        self.sums.into_iter().filter_map(|(feature, total, similarity_sum)| {
            let average = total / similarity_sum;
            if average.is_finite() {
                Some((feature, average))
            } else {
                debug!(feature, "Dropping feature with non-finite weighted average");
                None
            }
        })
    }
}

/// Sort descending by value, keeping input order among ties, and keep `n`
fn top_n<T: Scored>(mut scores: Vec<T>, n: usize) -> Vec<T> {
    scores.sort_by_key(|score| Reverse(OrderedFloat(score.value())));
    scores.truncate(n);
    scores
}
