use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NAME_WIDTH: usize = 40;
const MIN_NAME_WIDTH: usize = 8;

/// Configuration for catalog, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Dataset document to load instead of the embedded catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,

    /// Width of the product name column; longer names are truncated
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["dataset", "name-width"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "dataset" => Some(
                self.dataset
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(embedded)".to_string()),
            ),
            "name-width" => Some(self.name_width.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty dataset value reverts to the
    /// embedded catalog.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "dataset" => {
                self.dataset = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "name-width" => {
                let width: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid width: {}", value))?;
                if width < MIN_NAME_WIDTH {
                    return Err(format!("name-width must be at least {}", MIN_NAME_WIDTH));
                }
                self.name_width = width;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
