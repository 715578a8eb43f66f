//! SQL query operations for database access
//!
//! This module provides low-level query functions for database operations.
//! For live snapshots and business rules, use `InventoryStore` and `InventoryService`.

use rusqlite::{Connection, OptionalExtension, Row, params};
use crate::error::Result;
use super::models::{Item, ItemInput};

const SELECT_COLUMNS: &str = "SELECT id, name, quantity, price FROM inventory";

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        price: row.get(3)?,
    })
}

/// Get all items ordered by id
pub fn get_all_items(conn: &Connection) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
    let items = stmt.query_map([], item_from_row)?;
    items.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get an item by id
pub fn get_item(conn: &Connection, id: i64) -> Result<Option<Item>> {
    let item = conn
        .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?"), params![id], item_from_row)
        .optional()?;
    Ok(item)
}

/// Find an item by exact name; the lowest id wins when names repeat
pub fn find_item_by_name(conn: &Connection, name: &str) -> Result<Option<Item>> {
    let item = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE name = ? ORDER BY id LIMIT 1"),
            params![name],
            item_from_row,
        )
        .optional()?;
    Ok(item)
}

/// Count stored items
pub fn count_items(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))?;
    Ok(count)
}

/// Insert a new item and return it with its assigned id
pub fn insert_item(conn: &Connection, input: &ItemInput) -> Result<Item> {
    conn.execute(
        "INSERT INTO inventory (name, quantity, price) VALUES (?, ?, ?)",
        params![input.name, input.quantity, input.price],
    )?;
    Ok(input.clone().into_item(conn.last_insert_rowid()))
}

/// Insert a new item only if no item has the same name, in a single statement
pub fn insert_item_if_absent(conn: &Connection, input: &ItemInput) -> Result<Option<Item>> {
    let rows = conn.execute(
        "INSERT INTO inventory (name, quantity, price)
         SELECT ?1, ?2, ?3
         WHERE NOT EXISTS (SELECT 1 FROM inventory WHERE name = ?1)",
        params![input.name, input.quantity, input.price],
    )?;
    if rows == 0 {
        return Ok(None);
    }
    Ok(Some(input.clone().into_item(conn.last_insert_rowid())))
}

/// Overwrite quantity and price of an item; returns the number of rows changed
pub fn update_item(conn: &Connection, item: &Item) -> Result<usize> {
    let rows = conn.execute(
        "UPDATE inventory SET quantity = ?, price = ? WHERE id = ?",
        params![item.quantity, item.price, item.id],
    )?;
    Ok(rows)
}

/// Delete an item by id; returns the number of rows removed
pub fn delete_item(conn: &Connection, id: i64) -> Result<usize> {
    let rows = conn.execute("DELETE FROM inventory WHERE id = ?", params![id])?;
    Ok(rows)
}
