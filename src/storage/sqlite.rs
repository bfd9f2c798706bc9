//! SQLite key/value storage

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OptionalExtension, params};
use crate::error::{VaultError, Result};
use crate::STORAGE_KEY;
use super::{Persistence, schema};

/// Timestamp format used in database
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Storage keeping the serialized record list in one SQLite row
pub struct SqliteStorage {
    /// Path to the database file (`None` for in-memory databases)
    path: Option<PathBuf>,
    /// Slot key
    key: String,
    /// SQLite connection
    conn: Option<Connection>,
}

impl SqliteStorage {
    /// Open (or create) a database at the specified path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        for sql in schema::CREATE_ALL_TABLES {
            conn.execute(sql, [])?;
        }

        Ok(Self {
            path,
            key: STORAGE_KEY.to_string(),
            conn: Some(conn),
        })
    }

    /// Use a slot key other than the default
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            VaultError::StorageError("Database not open".to_string())
        })
    }

    /// Get the database path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Slot key read and written by [`Persistence`]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

impl Persistence for SqliteStorage {
    fn load(&self) -> Result<Option<String>> {
        let value = self.connection()?
            .query_row(schema::SELECT_VALUE, params![self.key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, data: &str) -> Result<()> {
        let changed = chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string();
        self.connection()?
            .execute(schema::UPSERT_VALUE, params![self.key, data, changed])?;
        Ok(())
    }
}

impl Drop for SqliteStorage {
    fn drop(&mut self) {
        self.close();
    }
}
