//! # Credvault Core
//!
//! Storage and query layer of a small credential vault.
//!
//! ## Features
//!
//! - Credential records persisted as a single JSON blob under one fixed key
//! - Pluggable persistence (in-memory, JSON file, SQLite key/value table)
//! - Category / favorites selectors with case-insensitive search
//! - Category tallies for sidebar counts
//! - Password strength heuristic and random password generator
//!
//! ## Example
//!
//! ```no_run
//! use credvault::{RecordStore, NewCredential, Selector, FileStorage, filter_records};
//! use std::path::Path;
//!
//! let storage = FileStorage::new(Path::new("/path/to/vault.json"));
//! let mut store = RecordStore::new(storage);
//!
//! store.create(NewCredential::new("Mail", "john", "s3cret!")).unwrap();
//!
//! let records = store.list().unwrap();
//! for record in filter_records(&records, "mail", &Selector::All) {
//!     println!("{}: {}", record.id, record.title);
//! }
//! ```

pub mod storage;
pub mod business;
pub mod password;
pub mod utils;
pub mod error;

// Re-export main types
pub use error::{VaultError, FieldError, Result};
pub use storage::models::{CredentialRecord, NewCredential, CategoryTally};
pub use storage::{Persistence, MemoryStorage, FileStorage, SqliteStorage};
pub use business::{RecordStore, Selector, filter_records, validate_credential};
pub use password::{generate_password, evaluate_strength, PasswordOptions, StrengthReport, StrengthLabel};

/// Storage key holding the serialized record list
pub const STORAGE_KEY: &str = "secure_password_manager_data";

/// Category name used for records without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Categories offered by the record editing form
pub const PRESET_CATEGORIES: &[&str] = &[
    "Social",
    "Work",
    "Finance",
    "Shopping",
    "Entertainment",
    "Other",
];

/// Default length of generated passwords
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Length used when the editing form generates a password
pub const FORM_PASSWORD_LENGTH: usize = 16;
