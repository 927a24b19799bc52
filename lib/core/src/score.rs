//! Result records produced by ranking queries

use serde::{Deserialize, Serialize};

/// A category paired with a score computed for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub value: f64,
}

impl CategoryScore {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A feature paired with a score computed for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    pub name: String,
    pub value: f64,
}

impl FeatureScore {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Common view over score records, used when sorting and truncating results
pub trait Scored {
    fn name(&self) -> &str;
    fn value(&self) -> f64;
}

impl Scored for CategoryScore {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.value
    }
}

impl Scored for FeatureScore {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.value
    }
}
