//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for catalog operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the datasets from its [`DataSource`] and derives the enriched
//!   [`Catalog`] once per load
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (user names and category titles to ids)
//! - **Returns structured types** (`CmdResult`, [`Session`])
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the terminal**: No stdout, stderr, or formatting
//!
//! ## Generic Over DataSource
//!
//! `CatalogApi<S: DataSource>` is generic over where the records come from:
//! - Production: `CatalogApi<EmbeddedSource>` or `CatalogApi<FileSource>`
//! - Testing: `CatalogApi<InMemorySource>`

use crate::commands::enrich::{find_category, find_user, Catalog};
use crate::commands::sort::SortSpec;
use crate::commands::{self, CatalogPaths, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{CategoryId, UserId};
use crate::session::Session;
use crate::source::{DataSource, Dataset};
use crate::state::FilterState;
use std::sync::Arc;

pub struct CatalogApi<S: DataSource> {
    source: S,
    paths: CatalogPaths,
    dataset: Dataset,
    catalog: Arc<Catalog>,
}

impl<S: DataSource> CatalogApi<S> {
    pub fn new(source: S, paths: CatalogPaths) -> Result<Self> {
        let dataset = source.load()?;
        let catalog = Arc::new(Catalog::from_dataset(&dataset));
        tracing::info!(
            source = %source.describe(),
            products = dataset.products.len(),
            "catalog loaded"
        );

        Ok(Self {
            source,
            paths,
            dataset,
            catalog,
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    /// Re-read the source and rebuild the enriched catalog.
    pub fn reload(&mut self) -> Result<Arc<Catalog>> {
        self.dataset = self.source.load()?;
        self.catalog = Arc::new(Catalog::from_dataset(&self.dataset));
        tracing::info!(source = %self.source.describe(), "catalog reloaded");
        Ok(Arc::clone(&self.catalog))
    }

    pub fn list(&self, state: &FilterState, sort: Option<SortSpec>) -> CmdResult {
        commands::list::run(&self.catalog, state, sort)
    }

    /// A fresh interactive session over the current catalog, in the initial state.
    pub fn session(&self) -> Session {
        Session::new(Arc::clone(&self.catalog))
    }

    pub fn check(&self) -> CmdResult {
        commands::check::run(&self.dataset, &self.source.describe())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Resolves a user selector: `all` (or `0`) for every user, an id, or a
    /// case-insensitive name.
    pub fn resolve_user(&self, input: &str) -> Result<Option<UserId>> {
        resolve_user(&self.catalog, input)
    }

    /// Resolves a category selector: an id or a case-insensitive title.
    pub fn resolve_category(&self, input: &str) -> Result<CategoryId> {
        resolve_category(&self.catalog, input)
    }
}

pub fn resolve_user(catalog: &Catalog, input: &str) -> Result<Option<UserId>> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    if let Ok(n) = input.parse::<u32>() {
        if n == 0 {
            return Ok(None);
        }
        if let Some(user) = find_user(catalog.users(), UserId(n)) {
            return Ok(Some(user.id));
        }
    }

    let lowered = input.to_lowercase();
    catalog
        .users()
        .iter()
        .find(|u| u.name.to_lowercase() == lowered)
        .map(|u| Some(u.id))
        .ok_or_else(|| CatalogError::Api(format!("Unknown user: {}", input)))
}

pub fn resolve_category(catalog: &Catalog, input: &str) -> Result<CategoryId> {
    let input = input.trim();
    if let Ok(n) = input.parse::<u32>() {
        if let Some(category) = find_category(catalog.categories(), CategoryId(n)) {
            return Ok(category.id());
        }
    }

    let lowered = input.to_lowercase();
    catalog
        .categories()
        .iter()
        .find(|c| c.category.title.to_lowercase() == lowered)
        .map(|c| c.id())
        .ok_or_else(|| CatalogError::Api(format!("Unknown category: {}", input)))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::sort::{SortDirection, SortKey};
pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::state::Transition;
