//! Database schema definitions

/// SQL to create the key/value table
pub const CREATE_KEY_VALUE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS credvault_storage (
    key             VARCHAR PRIMARY KEY NOT NULL,
    value           TEXT NOT NULL,
    change_timestamp TEXT
)
"#;

/// SQL to read one slot
pub const SELECT_VALUE: &str =
    "SELECT value FROM credvault_storage WHERE key = ?1";

/// SQL to write one slot
pub const UPSERT_VALUE: &str =
    "INSERT OR REPLACE INTO credvault_storage (key, value, change_timestamp) VALUES (?1, ?2, ?3)";

/// All tables to create for a new database
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_KEY_VALUE_TABLE,
];
