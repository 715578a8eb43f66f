//! Raw form values coming from the UI
//!
//! The add form hands over three text fields; the edit card hands over new
//! quantity and price text for an existing item.

use serde::{Deserialize, Serialize};
use crate::database::{Item, ItemInput};
use crate::error::{InventoryError, Result};

/// Text of the "add item" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemForm {
    /// Name field text
    pub name: String,
    /// Quantity field text
    pub quantity: String,
    /// Price field text
    pub price: String,
}

impl ItemForm {
    /// Build a form from the three field texts
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Lenient conversion: unparseable numbers become 0
    pub fn to_input(&self) -> ItemInput {
        ItemInput {
            name: self.name.clone(),
            quantity: self.quantity.parse().unwrap_or(0),
            price: parse_finite(&self.price).unwrap_or(0.0),
        }
    }

    /// Strict conversion: every field must be present and parse
    pub fn parse(&self) -> Result<ItemInput> {
        if self.name.is_empty() {
            return Err(InventoryError::InvalidInput("name is required".to_string()));
        }

        let quantity = self.quantity.trim();
        if quantity.is_empty() {
            return Err(InventoryError::InvalidInput("quantity is required".to_string()));
        }
        let quantity: i64 = quantity.parse().map_err(|_| {
            InventoryError::InvalidInput(format!("quantity '{}' is not a whole number", quantity))
        })?;

        let price = self.price.trim();
        if price.is_empty() {
            return Err(InventoryError::InvalidInput("price is required".to_string()));
        }
        let price = parse_finite(price).ok_or_else(|| {
            InventoryError::InvalidInput(format!("price '{}' is not a number", price))
        })?;

        Ok(ItemInput {
            name: self.name.clone(),
            quantity,
            price,
        })
    }

    /// Reset all fields after a successful submit
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Item {
    /// Copy of this item with edit-card text applied.
    ///
    /// Text that does not parse keeps the current value.
    pub fn with_edits(&self, quantity: &str, price: &str) -> Item {
        Item {
            quantity: quantity.parse().unwrap_or(self.quantity),
            price: parse_finite(price).unwrap_or(self.price),
            ..self.clone()
        }
    }
}

/// Parse a price, refusing `NaN` and infinities
fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|price| price.is_finite())
}
