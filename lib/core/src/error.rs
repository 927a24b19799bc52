use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// No other category holding the feature has a usable similarity to the
    /// target category, so the weighted average has nothing to divide by.
    #[error("No prediction available for feature '{feature}' in category '{category}'")]
    NoPrediction { category: String, feature: String },
}

impl Error {
    pub fn no_prediction(category: impl Into<String>, feature: impl Into<String>) -> Self {
        Error::NoPrediction {
            category: category.into(),
            feature: feature.into(),
        }
    }
}
