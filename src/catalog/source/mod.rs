//! # Source Layer
//!
//! This module defines where the catalog's datasets come from. The [`DataSource`] trait
//! lets the rest of the application stay ignorant of the origin of the records.
//!
//! ## Implementations
//!
//! - [`embedded::EmbeddedSource`]: the fixture compiled into the binary (`data/catalog.json`)
//! - [`file::FileSource`]: a JSON document on disk, same shape as the fixture
//! - [`memory::InMemorySource`]: a dataset held in memory, for tests and embedding
//!
//! ## Document Format
//!
//! ```text
//! {
//!   "users":      [{ "id": 1, "name": "Max", "sex": "m" }],
//!   "categories": [{ "id": 1, "title": "Grocery", "icon": "🍺", "ownerId": 1 }],
//!   "products":   [{ "id": 1, "name": "Milk", "categoryId": 1 }]
//! }
//! ```
//!
//! Any of the three lists may be omitted and loads as empty. Referential integrity
//! between the lists is not checked here; see `commands::check`.
//!
//! Loading is the only fallible step in the system. Once a [`Dataset`] exists, every
//! derived view over it is a total function.

use crate::error::Result;
use crate::model::{Category, Product, User};
use serde::{Deserialize, Serialize};

pub mod embedded;
pub mod file;
pub mod memory;

/// The three raw datasets, as loaded. Immutable for the lifetime of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Dataset {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Abstract origin of a [`Dataset`].
pub trait DataSource {
    /// Produce a fresh copy of the datasets.
    fn load(&self) -> Result<Dataset>;

    /// Human readable description, used in logs and reports.
    fn describe(&self) -> String;
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn load(&self) -> Result<Dataset> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_default_to_empty() {
        let dataset = Dataset::from_json(r#"{"users": [{"id": 1, "name": "Max", "sex": "m"}]}"#)
            .unwrap();
        assert_eq!(dataset.users.len(), 1);
        assert!(dataset.categories.is_empty());
        assert!(dataset.products.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(Dataset::from_json("[1, 2, 3]").is_err());
        assert!(Dataset::from_json(r#"{"products": [{"id": "one"}]}"#).is_err());
    }
}
