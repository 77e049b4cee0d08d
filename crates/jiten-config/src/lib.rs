use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::scraper::ScraperConfig;

pub mod log;
pub mod scraper;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build the config from `JITEN_*` environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            scraper: ScraperConfig::new(),
            log: LogConfig::new(),
        }
    }

    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
