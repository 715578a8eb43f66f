//! Business logic layer for Inventory Core
//!
//! This module provides the store that owns item records, the live view of
//! the collection, and the service that enforces unique names.

pub mod store;
pub mod subscription;
pub mod service;
pub mod form;

pub use store::InventoryStore;
pub use subscription::Subscription;
pub use service::InventoryService;
pub use form::ItemForm;
