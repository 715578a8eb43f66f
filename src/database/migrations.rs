//! Schema version handling
//!
//! There is no upgrade path: a database at any other version is wiped and
//! recreated at the current one.

use rusqlite::Connection;
use tracing::info;
use crate::error::Result;
use super::schema;

/// Current schema version, stored in `PRAGMA user_version`
pub const CURRENT_VERSION: i32 = crate::DB_VERSION;

/// Create or recreate the schema so that it matches `CURRENT_VERSION`
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;
    let has_table = table_exists(conn, schema::INVENTORY_TABLE)?;

    if version == CURRENT_VERSION && has_table {
        return Ok(());
    }

    if version != 0 || has_table {
        info!(found = version, expected = CURRENT_VERSION, "schema version mismatch, recreating inventory table");
        recreate_schema(conn)?;
    } else {
        create_schema(conn)?;
    }

    set_schema_version(conn, CURRENT_VERSION)
}

/// Create all tables
fn create_schema(conn: &Connection) -> Result<()> {
    for sql in schema::CREATE_ALL_TABLES {
        conn.execute(sql, [])?;
    }
    Ok(())
}

/// Drop existing data and create all tables from scratch
fn recreate_schema(conn: &Connection) -> Result<()> {
    conn.execute(schema::DROP_INVENTORY_TABLE, [])?;
    create_schema(conn)
}

/// Check if a table with the given name exists
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        [table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Get the schema version recorded in the database header
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Record the schema version in the database header
pub fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)?;
    Ok(())
}
