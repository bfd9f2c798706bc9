//! Record Store
//!
//! Owns the persisted record list. Every operation reads the whole list
//! from the persistence slot and mutations write the whole list back.

use tracing::{debug, error, warn};
use crate::error::{VaultError, Result};
use crate::storage::{CredentialRecord, Persistence};

/// Main record store interface
pub struct RecordStore<P: Persistence> {
    /// Slot holding the serialized record list
    pub(crate) persistence: P,
}

impl<P: Persistence> RecordStore<P> {
    /// Create a store over the given persistence backend
    pub fn new(persistence: P) -> Self {
        Self { persistence }
    }

    /// Get a reference to the persistence backend
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Get a mutable reference to the persistence backend
    pub fn persistence_mut(&mut self) -> &mut P {
        &mut self.persistence
    }

    /// Consume the store, returning the persistence backend
    pub fn into_inner(self) -> P {
        self.persistence
    }

    /// Read and parse the full record list
    ///
    /// An empty slot is an empty list. A blob that does not parse is
    /// reported as `CorruptData` rather than treated as empty, so a later
    /// write cannot silently discard it.
    pub(crate) fn load_records(&self) -> Result<Vec<CredentialRecord>> {
        let Some(data) = self.persistence.load()? else {
            debug!("record slot empty");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<CredentialRecord>>(&data) {
            Ok(records) => {
                debug!(count = records.len(), "loaded records");
                Ok(records)
            }
            Err(e) => {
                warn!(error = %e, "stored record list is malformed");
                Err(VaultError::CorruptData(e.to_string()))
            }
        }
    }

    /// Serialize and write the full record list
    pub(crate) fn save_records(&mut self, records: &[CredentialRecord]) -> Result<()> {
        let data = serde_json::to_string(records)?;
        if let Err(e) = self.persistence.save(&data) {
            error!(error = %e, "failed to save records");
            return Err(e);
        }
        debug!(count = records.len(), "saved records");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::STORAGE_KEY;

    pub fn create_test_store() -> RecordStore<MemoryStorage> {
        RecordStore::new(MemoryStorage::new())
    }

    /// Backend whose writes always fail
    pub struct FailingStorage {
        pub data: Option<String>,
    }

    impl Persistence for FailingStorage {
        fn load(&self) -> Result<Option<String>> {
            Ok(self.data.clone())
        }

        fn save(&mut self, _data: &str) -> Result<()> {
            Err(VaultError::StorageError("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_load_empty_slot() {
        let store = create_test_store();
        assert!(store.load_records().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_array() {
        let mut storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "[]");
        let store = RecordStore::new(storage);
        assert!(store.load_records().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_is_error() {
        let mut storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "{not json");
        let store = RecordStore::new(storage);
        assert!(matches!(store.load_records(), Err(VaultError::CorruptData(_))));
    }

    #[test]
    fn test_load_wrong_shape_is_error() {
        let mut storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, r#"{"id": "x"}"#);
        let store = RecordStore::new(storage);
        assert!(matches!(store.load_records(), Err(VaultError::CorruptData(_))));
    }

    #[test]
    fn test_save_failure_surfaces() {
        let mut store = RecordStore::new(FailingStorage { data: None });
        let result = store.save_records(&[]);
        assert!(matches!(result, Err(VaultError::StorageError(_))));
    }

    #[test]
    fn test_into_inner() {
        let mut store = create_test_store();
        store.save_records(&[]).unwrap();
        let storage = store.into_inner();
        assert_eq!(storage.get_item(STORAGE_KEY), Some("[]"));
    }
}
