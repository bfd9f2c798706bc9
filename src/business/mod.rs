//! Business logic layer for Credvault
//!
//! This module provides the RecordStore API for managing credential
//! records, category tallies, search filtering and form validation.

pub mod store;
pub mod records;
pub mod categories;
pub mod filter;
pub mod validation;

pub use store::RecordStore;
pub use categories::tally_categories;
pub use filter::{Selector, filter_records, matches_search};
pub use validation::validate_credential;
