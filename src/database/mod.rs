//! Database layer for Inventory Core
//!
//! Handles SQLite database operations including:
//! - Schema creation and version checks
//! - CRUD statements for inventory items

pub mod models;
pub mod schema;
pub mod connection;
pub mod migrations;
pub mod queries;

pub use connection::Database;
pub use models::*;
