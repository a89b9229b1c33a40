use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the catalog files live. Every field can be omitted from the JSON
/// config file, in which case the default is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub movies_file: String,
    pub showtimes_file: String,
    pub tickets_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            movies_file: "movies.csv".to_string(),
            showtimes_file: "showTimes.csv".to_string(),
            tickets_file: "sold_tickets.csv".to_string(),
        }
    }
}

/// Resolved locations of the three catalog files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub movies: PathBuf,
    pub showtimes: PathBuf,
    pub sold_tickets: PathBuf,
}

impl CatalogPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        StoreConfig {
            data_dir: dir.as_ref().to_path_buf(),
            ..StoreConfig::default()
        }
        .paths()
    }
}

impl StoreConfig {
    /// Load the config from a JSON file.
    /// Returns the defaults if the file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn paths(&self) -> CatalogPaths {
        CatalogPaths {
            movies: self.data_dir.join(&self.movies_file),
            showtimes: self.data_dir.join(&self.showtimes_file),
            sold_tickets: self.data_dir.join(&self.tickets_file),
        }
    }
}
