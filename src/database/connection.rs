//! Database connection management

use std::path::Path;
use rusqlite::Connection;
use tracing::info;
use crate::error::{InventoryError, Result};
use super::migrations;

/// Database connection wrapper
pub struct Database {
    /// SQLite connection
    conn: Option<Connection>,
}

impl Database {
    /// Open (or create) a database file and bring its schema to the current version
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        migrations::ensure_schema(&conn)?;
        info!(path = %path.display(), "inventory database opened");

        Ok(Self { conn: Some(conn) })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::ensure_schema(&conn)?;

        Ok(Self { conn: Some(conn) })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            InventoryError::StorageError("Database not open".to_string())
        })
    }

    /// Close the database connection
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            info!("inventory database closed");
        }
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}
