//! Data models for inventory entities

use serde::{Deserialize, Serialize};

/// Stored inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, never reused
    pub id: i64,
    /// Item name, the natural deduplication key (case-sensitive)
    pub name: String,
    /// Units in stock
    pub quantity: i64,
    /// Unit price
    pub price: f64,
}

/// Values for a new item, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    /// Item name
    pub name: String,
    /// Units in stock
    pub quantity: i64,
    /// Unit price
    pub price: f64,
}

impl ItemInput {
    /// Build an input from its three fields
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Attach a store-assigned id
    pub(crate) fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
