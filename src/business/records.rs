//! Record operations
//!
//! This module provides create/read/update/delete operations for the RecordStore.

use tracing::{info, warn};
use crate::error::{VaultError, Result};
use crate::storage::{CredentialRecord, NewCredential, Persistence};
use crate::utils::{generate_unique_record_id, next_update_timestamp, now};
use super::store::RecordStore;

impl<P: Persistence> RecordStore<P> {
    /// Get all records in persisted order
    pub fn list(&self) -> Result<Vec<CredentialRecord>> {
        self.load_records()
    }

    /// Get a record by ID
    pub fn get(&self, id: &str) -> Result<Option<CredentialRecord>> {
        let records = self.load_records()?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    /// Create a new record
    ///
    /// Assigns a fresh ID and stamps both timestamps, appends the record
    /// to the list and persists it. Field validation is the caller's job
    /// (see [`crate::validate_credential`]).
    pub fn create(&mut self, fields: NewCredential) -> Result<CredentialRecord> {
        let mut records = self.load_records()?;

        let id = generate_unique_record_id(|candidate| records.iter().any(|r| r.id == candidate));
        let timestamp = now();

        let record = CredentialRecord {
            id,
            title: fields.title,
            username: fields.username,
            password: fields.password,
            website: fields.website,
            category: fields.category,
            notes: fields.notes,
            favorite: fields.favorite,
            created_at: timestamp,
            updated_at: timestamp,
        };

        records.push(record.clone());
        self.save_records(&records)?;

        info!(id = %record.id, "created record");
        Ok(record)
    }

    /// Replace an existing record
    ///
    /// All fields are taken from `record` except `created_at`, which keeps
    /// its stored value, and `updated_at`, which is re-stamped. The record
    /// keeps its position in the list.
    pub fn update(&mut self, record: &CredentialRecord) -> Result<CredentialRecord> {
        let mut records = self.load_records()?;

        let Some(slot) = records.iter_mut().find(|r| r.id == record.id) else {
            warn!(id = %record.id, "update of unknown record");
            return Err(VaultError::RecordNotFound(record.id.clone()));
        };

        let Some(updated_at) = next_update_timestamp(slot.updated_at) else {
            warn!(id = %record.id, "stored update timestamp out of range");
            return Err(VaultError::CorruptData(format!(
                "updatedAt of record {} cannot advance", record.id
            )));
        };

        let updated = CredentialRecord {
            created_at: slot.created_at,
            updated_at,
            ..record.clone()
        };
        *slot = updated.clone();

        self.save_records(&records)?;

        info!(id = %updated.id, "updated record");
        Ok(updated)
    }

    /// Delete a record
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let mut records = self.load_records()?;

        let Some(pos) = records.iter().position(|r| r.id == id) else {
            warn!(id = %id, "delete of unknown record");
            return Err(VaultError::RecordNotFound(id.to_string()));
        };

        records.remove(pos);
        self.save_records(&records)?;

        info!(id = %id, "deleted record");
        Ok(())
    }

    /// Flip the favorite flag of a record
    pub fn toggle_favorite(&mut self, id: &str) -> Result<CredentialRecord> {
        let mut record = self.get(id)?
            .ok_or_else(|| VaultError::RecordNotFound(id.to_string()))?;
        record.favorite = !record.favorite;
        self.update(&record)
    }
}
