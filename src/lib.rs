//! # Inventory Core
//!
//! Data-access layer for a small inventory application.
//!
//! ## Features
//!
//! - SQLite storage of items (name, quantity, price)
//! - Live "all items" subscriptions that follow every mutation
//! - Name-uniqueness and required-field rules in `InventoryService`
//! - Lenient and strict parsing of raw form text
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use invcore::{InventoryService, InventoryStore, ItemInput, StoreConfig};
//!
//! let store = Arc::new(InventoryStore::open(&StoreConfig::default()).unwrap());
//! let service = InventoryService::new(store.clone());
//!
//! let items = service.subscribe_items().unwrap();
//! service.add_item(ItemInput::new("Apple", 10, 1.5)).unwrap();
//!
//! for item in items.latest().unwrap_or_default() {
//!     println!("{}: {} x {}", item.id, item.name, item.quantity);
//! }
//! store.close().unwrap();
//! ```

pub mod database;
pub mod business;
pub mod assets;
pub mod config;
pub mod error;

// Re-export main types
pub use error::{InventoryError, Result};
pub use database::models::{Item, ItemInput};
pub use business::{InventoryService, InventoryStore, ItemForm, Subscription};
pub use config::StoreConfig;
pub use assets::image_for;

/// Database schema version
pub const DB_VERSION: i32 = 1;

/// Database filename
pub const DATABASE_FILENAME: &str = "shop_database";

/// Image identifier for names without a bundled image
pub const UNKNOWN_IMAGE: &str = "unknown";
