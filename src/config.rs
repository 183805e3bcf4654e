use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::CATALOG_URL;
use crate::error::{CatalogError, Result};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Remote catalog document location.
    pub url: String,
    /// Request timeout for the one-shot fetch.
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: CATALOG_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    /// Load `config.toml` from the working directory; a missing file is
    /// not an error, the built-in defaults apply.
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        if !Path::new(config_path).exists() {
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            CatalogError::Config(format!("Failed to read config file '{config_path}': {e}"))
        })?;
        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
