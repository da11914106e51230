use super::{DataSource, Dataset};
use crate::error::Result;

const EMBEDDED_CATALOG: &str = include_str!("../../../data/catalog.json");

/// The fixture shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

impl DataSource for EmbeddedSource {
    fn load(&self) -> Result<Dataset> {
        Dataset::from_json(EMBEDDED_CATALOG)
    }

    fn describe(&self) -> String {
        "embedded catalog".to_string()
    }
}
