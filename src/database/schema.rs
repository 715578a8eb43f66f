//! Database schema definitions

/// Name of the single inventory table
pub const INVENTORY_TABLE: &str = "inventory";

/// SQL to create the inventory table
pub const CREATE_INVENTORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL,
    quantity        INTEGER NOT NULL,
    price           REAL NOT NULL
)
"#;

/// SQL to drop the inventory table during destructive recreation
pub const DROP_INVENTORY_TABLE: &str = "DROP TABLE IF EXISTS inventory";

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_INVENTORY_TABLE,
];
