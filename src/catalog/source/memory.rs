use super::{DataSource, Dataset};
use crate::error::Result;

/// In-memory datasets for testing and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    dataset: Dataset,
}

impl InMemorySource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Swap the held dataset; the next `load` returns it.
    pub fn replace(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }
}

impl DataSource for InMemorySource {
    fn load(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }

    fn describe(&self) -> String {
        "in-memory catalog".to_string()
    }
}
