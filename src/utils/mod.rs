//! Small shared helpers: identifiers and timestamps

pub mod common;
pub mod id_gen;

pub use common::{now, next_update_timestamp};
pub use id_gen::{generate_record_id, generate_unique_record_id};
