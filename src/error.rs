//! Error types for Inventory Core

use thiserror::Error;

/// Main error type for inventory operations
#[derive(Error, Debug)]
pub enum InventoryError {
    /// A required field is empty, zero, or could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An item with the same name is already stored
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// Database operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl InventoryError {
    /// Notification text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            InventoryError::InvalidInput(_) => "Please fill all the fields!".to_string(),
            InventoryError::DuplicateName(_) => "Item with this name already exists!".to_string(),
            InventoryError::StorageError(_)
            | InventoryError::ConfigError(_)
            | InventoryError::IoError(_) => {
                "Something went wrong while saving, please try again.".to_string()
            }
        }
    }

    /// True for failures resolved at the service boundary without touching storage
    pub fn is_rejection(&self) -> bool {
        matches!(self, InventoryError::InvalidInput(_) | InventoryError::DuplicateName(_))
    }
}

impl From<rusqlite::Error> for InventoryError {
    fn from(err: rusqlite::Error) -> Self {
        InventoryError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::ConfigError(err.to_string())
    }
}

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
