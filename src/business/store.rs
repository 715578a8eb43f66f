//! Inventory store
//!
//! The single owner of persisted items. Every mutation that changes a row
//! publishes a fresh snapshot to all live subscriptions before the
//! connection lock is released, so subscribers observe mutations in commit
//! order.

use std::sync::{Arc, Mutex, MutexGuard};
use rusqlite::Connection;
use tracing::{debug, warn};
use crate::config::StoreConfig;
use crate::database::{Database, Item, ItemInput, queries};
use crate::error::{InventoryError, Result};
use super::subscription::{SnapshotSlot, Subscription};

/// Durable CRUD over the item collection
pub struct InventoryStore {
    /// Database connection, one statement at a time
    db: Mutex<Database>,
    /// Mailboxes of live subscriptions
    subscribers: Mutex<Vec<Arc<SnapshotSlot>>>,
}

impl InventoryStore {
    /// Open the store described by `config`
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let db = if config.in_memory {
            Database::open_in_memory()?
        } else {
            std::fs::create_dir_all(&config.folder)?;
            Database::open(&config.database_path())?
        };
        Ok(Self::from_database(db))
    }

    /// Open a private in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_database(Database::open_in_memory()?))
    }

    fn from_database(db: Database) -> Self {
        Self {
            db: Mutex::new(db),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Close the database and disconnect every subscription
    pub fn close(&self) -> Result<()> {
        self.lock_db()?.close();
        for slot in self.lock_subscribers()?.drain(..) {
            slot.close();
        }
        Ok(())
    }

    /// Check if the database is still open
    pub fn is_open(&self) -> bool {
        self.lock_db().map(|db| db.is_open()).unwrap_or(false)
    }

    /// Insert a new item; no uniqueness check is made here
    pub fn insert(&self, input: ItemInput) -> Result<Item> {
        self.mutate(|conn| {
            let item = queries::insert_item(conn, &input)?;
            debug!(id = item.id, name = %item.name, "item inserted");
            Ok((item, true))
        })
    }

    /// Insert a new item only if its name is not stored yet, atomically
    pub fn insert_if_absent(&self, input: ItemInput) -> Result<Option<Item>> {
        self.mutate(|conn| {
            let inserted = queries::insert_item_if_absent(conn, &input)?;
            match &inserted {
                Some(item) => debug!(id = item.id, name = %item.name, "item inserted"),
                None => debug!(name = %input.name, "insert skipped, name already stored"),
            }
            let changed = inserted.is_some();
            Ok((inserted, changed))
        })
    }

    /// Overwrite quantity and price of the item with the same id; a missing id is a no-op
    pub fn update(&self, item: &Item) -> Result<()> {
        self.mutate(|conn| {
            let rows = queries::update_item(conn, item)?;
            if rows == 0 {
                warn!(id = item.id, "update ignored, item not found");
            } else {
                debug!(id = item.id, quantity = item.quantity, price = item.price, "item updated");
            }
            Ok(((), rows > 0))
        })
    }

    /// Delete the item with the same id; a missing id is a no-op
    pub fn delete(&self, item: &Item) -> Result<()> {
        self.mutate(|conn| {
            let rows = queries::delete_item(conn, item.id)?;
            if rows == 0 {
                warn!(id = item.id, "delete ignored, item not found");
            } else {
                debug!(id = item.id, name = %item.name, "item deleted");
            }
            Ok(((), rows > 0))
        })
    }

    /// Find an item by exact name; the lowest id wins if the name repeats
    pub fn find_by_name(&self, name: &str) -> Result<Option<Item>> {
        let db = self.lock_db()?;
        queries::find_item_by_name(db.connection()?, name)
    }

    /// Get an item by id
    pub fn get(&self, id: i64) -> Result<Option<Item>> {
        let db = self.lock_db()?;
        queries::get_item(db.connection()?, id)
    }

    /// One-shot snapshot of all items ordered by id
    pub fn get_all(&self) -> Result<Vec<Item>> {
        let db = self.lock_db()?;
        queries::get_all_items(db.connection()?)
    }

    /// Number of stored items
    pub fn count(&self) -> Result<usize> {
        let db = self.lock_db()?;
        let count = queries::count_items(db.connection()?)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Live query over all items ordered by id
    pub fn query_all(&self) -> Result<Subscription> {
        let db = self.lock_db()?;
        let snapshot = queries::get_all_items(db.connection()?)?;

        let slot = SnapshotSlot::with_snapshot(snapshot);
        let mut subscribers = self.lock_subscribers()?;
        subscribers.push(Arc::clone(&slot));
        debug!(subscribers = subscribers.len(), "subscription added");

        Ok(Subscription::new(slot))
    }

    /// Number of subscriptions that have not been dropped
    pub fn subscriber_count(&self) -> usize {
        self.lock_subscribers()
            .map(|mut subscribers| {
                subscribers.retain(|slot| slot.is_attached());
                subscribers.len()
            })
            .unwrap_or(0)
    }

    /// Run a statement under the connection lock and publish if it changed rows
    fn mutate<T>(&self, op: impl FnOnce(&Connection) -> Result<(T, bool)>) -> Result<T> {
        let db = self.lock_db()?;
        let conn = db.connection()?;
        let (value, changed) = op(conn)?;
        if changed {
            self.publish(conn);
        }
        Ok(value)
    }

    fn publish(&self, conn: &Connection) {
        let snapshot = match queries::get_all_items(conn) {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "could not read snapshot for subscribers");
                return;
            }
        };

        let Ok(mut subscribers) = self.lock_subscribers() else {
            warn!("subscriber list unavailable, snapshot dropped");
            return;
        };
        subscribers.retain(|slot| slot.offer(snapshot.clone()));
    }

    fn lock_db(&self) -> Result<MutexGuard<'_, Database>> {
        self.db.lock().map_err(|_| {
            InventoryError::StorageError("Inventory database lock poisoned".to_string())
        })
    }

    fn lock_subscribers(&self) -> Result<MutexGuard<'_, Vec<Arc<SnapshotSlot>>>> {
        self.subscribers.lock().map_err(|_| {
            InventoryError::StorageError("Subscriber list lock poisoned".to_string())
        })
    }
}
