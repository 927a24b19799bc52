//! Lock-guarded dataset for callers that mutate between queries
//!
//! The engine itself never locks. Wrapping the dataset here serializes
//! writers against readers: a query runs against a held read guard, so no
//! write can interleave with it.

use crate::Dataset;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedDataset {
    inner: Arc<RwLock<Dataset>>,
}

impl SharedDataset {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dataset)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Dataset> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Dataset> {
        self.inner.write()
    }

    pub fn add_category(&self, category: &str) {
        self.inner.write().add_category(category);
    }

    pub fn set_value(&self, category: &str, feature: &str, value: f64) {
        self.inner.write().set_value(category, feature, value);
    }

    /// Clone of the current contents, detached from later writes
    pub fn snapshot(&self) -> Dataset {
        self.inner.read().clone()
    }
}

impl From<Dataset> for SharedDataset {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}
