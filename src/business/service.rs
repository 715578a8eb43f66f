//! Inventory service
//!
//! Business rules in front of the store: required fields and unique names.
//!
//! `add_item` checks the name and then inserts as two separate store calls.
//! Two concurrent adds of the same name can both pass the check and both be
//! stored; callers that need the guarantee use `add_item_exclusive`.

use std::sync::Arc;
use tracing::{debug, warn};
use crate::database::{Item, ItemInput};
use crate::error::{InventoryError, Result};
use super::form::ItemForm;
use super::store::InventoryStore;
use super::subscription::Subscription;

/// Business façade over a shared `InventoryStore`
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<InventoryStore>,
}

impl InventoryService {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<InventoryStore> {
        &self.store
    }

    /// Check whether an item with exactly this name is stored
    pub fn name_exists(&self, name: &str) -> Result<bool> {
        Ok(self.store.find_by_name(name)?.is_some())
    }

    /// Validate and insert a new item, rejecting stored names
    pub fn add_item(&self, input: ItemInput) -> Result<Item> {
        validate_input(&input)?;

        if self.name_exists(&input.name)? {
            warn!(name = %input.name, "rejected duplicate item name");
            return Err(InventoryError::DuplicateName(input.name));
        }

        self.store.insert(input)
    }

    /// Like `add_item`, but the name check and the insert are one statement
    pub fn add_item_exclusive(&self, input: ItemInput) -> Result<Item> {
        validate_input(&input)?;

        let name = input.name.clone();
        match self.store.insert_if_absent(input)? {
            Some(item) => Ok(item),
            None => {
                warn!(name = %name, "rejected duplicate item name");
                Err(InventoryError::DuplicateName(name))
            }
        }
    }

    /// Parse the add form strictly and add the resulting item
    pub fn submit_form(&self, form: &ItemForm) -> Result<Item> {
        let input = form.parse()?;
        self.add_item(input)
    }

    /// Store new quantity and price for an existing item
    pub fn update_item(&self, item: &Item) -> Result<()> {
        self.store.update(item)
    }

    /// Remove an item
    pub fn remove_item(&self, item: &Item) -> Result<()> {
        self.store.delete(item)
    }

    /// Live view of all items
    pub fn subscribe_items(&self) -> Result<Subscription> {
        self.store.query_all()
    }

    /// Notification text for a successful add
    pub fn added_message(item: &Item) -> String {
        format!("{} added to the inventory!", item.name)
    }
}

/// Reject inputs with a missing name, quantity, or price.
///
/// Zero counts as missing, so an item with price 0.0 cannot be added.
pub fn validate_input(input: &ItemInput) -> Result<()> {
    if input.name.is_empty() {
        return Err(invalid("name is required"));
    }
    if input.quantity == 0 {
        return Err(invalid("quantity is required"));
    }
    if input.quantity < 0 {
        return Err(invalid("quantity must not be negative"));
    }
    if input.price == 0.0 {
        return Err(invalid("price is required"));
    }
    if !input.price.is_finite() || input.price < 0.0 {
        return Err(invalid("price must be a non-negative number"));
    }
    Ok(())
}

fn invalid(reason: &str) -> InventoryError {
    debug!(reason, "item input rejected");
    InventoryError::InvalidInput(reason.to_string())
}
