//! Persistence layer for Credvault
//!
//! The record list lives in a single slot holding one serialized blob.
//! Backends implement [`Persistence`] and only move that blob around:
//! - `MemoryStorage`: string-keyed map, like browser local storage
//! - `FileStorage`: one JSON file, replaced atomically on save
//! - `SqliteStorage`: one row of a key/value table

pub mod models;
pub mod schema;
mod memory;
mod file;
mod sqlite;

pub use memory::MemoryStorage;
pub use file::FileStorage;
pub use sqlite::SqliteStorage;
pub use models::*;

use crate::error::Result;

/// Port to the durable slot holding the serialized record list
pub trait Persistence {
    /// Read the stored blob, `None` if nothing has been stored yet
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored blob
    fn save(&mut self, data: &str) -> Result<()>;
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&mut self, data: &str) -> Result<()> {
        (**self).save(data)
    }
}
