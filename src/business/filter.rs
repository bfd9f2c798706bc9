//! Search and filter functionality
//!
//! Narrows a record list to the visible subset for the current search
//! term and sidebar selector.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use crate::storage::CredentialRecord;

/// Sidebar selection restricting the visible records
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// No restriction
    #[default]
    All,
    /// Only favorites, regardless of category
    Favorites,
    /// Exact category name
    Category(String),
}

impl Selector {
    /// Check if a record passes this selector
    pub fn matches(&self, record: &CredentialRecord) -> bool {
        match self {
            Selector::All => true,
            Selector::Favorites => record.favorite,
            Selector::Category(name) => record.category.as_deref() == Some(name.as_str()),
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Selector::All,
            "favorites" => Selector::Favorites,
            other => Selector::Category(other.to_string()),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("all"),
            Selector::Favorites => f.write_str("favorites"),
            Selector::Category(name) => f.write_str(name),
        }
    }
}

/// Check if a string contains the search phrase (case-insensitive)
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.to_lowercase().contains(&phrase.to_lowercase())
}

/// Check if a record matches a search term
///
/// Matches title, username, website and notes. An empty term matches
/// every record.
pub fn matches_search(record: &CredentialRecord, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }

    let hit = |text: &str| contains_phrase(text, search_term);

    hit(record.title.as_str())
        || hit(record.username.as_str())
        || record.website.as_deref().is_some_and(hit)
        || record.notes.as_deref().is_some_and(hit)
}

/// Get the records visible for a search term and selector
///
/// Keeps the input order. The input is not modified.
pub fn filter_records(
    records: &[CredentialRecord],
    search_term: &str,
    selector: &Selector,
) -> Vec<CredentialRecord> {
    records
        .iter()
        .filter(|r| selector.matches(r) && matches_search(r, search_term))
        .cloned()
        .collect()
}
