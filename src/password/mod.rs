//! Password tools for the record form
//!
//! Random password generation and a strength heuristic.

pub mod generator;
pub mod strength;

pub use generator::{generate_password, PasswordOptions};
pub use strength::{evaluate_strength, StrengthLabel, StrengthReport};
