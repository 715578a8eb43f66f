//! Store configuration

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::DATABASE_FILENAME;
use crate::error::Result;

/// Where and how the inventory database is opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Folder holding the database file
    pub folder: PathBuf,
    /// Database file name inside `folder`
    pub filename: String,
    /// Use a private in-memory database instead of a file
    pub in_memory: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            filename: DATABASE_FILENAME.to_string(),
            in_memory: false,
        }
    }
}

impl StoreConfig {
    /// File-backed configuration in `folder` with the default file name
    pub fn in_folder(folder: &Path) -> Self {
        Self {
            folder: folder.to_path_buf(),
            ..Self::default()
        }
    }

    /// In-memory configuration
    pub fn in_memory() -> Self {
        Self {
            in_memory: true,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Full path of the database file
    pub fn database_path(&self) -> PathBuf {
        self.folder.join(&self.filename)
    }
}
