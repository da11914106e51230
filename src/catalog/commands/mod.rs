use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::EnrichedProduct;
use std::path::PathBuf;
use std::sync::Arc;

pub mod check;
pub mod config;
pub mod enrich;
pub mod filter;
pub mod list;
pub mod sort;

#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub config_dir: Option<PathBuf>,
}

impl CatalogPaths {
    pub fn config_dir(&self) -> Result<PathBuf> {
        self.config_dir
            .clone()
            .ok_or_else(|| CatalogError::Config("No config directory available".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<Arc<EnrichedProduct>>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<Arc<EnrichedProduct>>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
