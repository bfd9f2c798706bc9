//! Data models for stored credential records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored credential entry
///
/// Serialized with camelCase keys and millisecond timestamps, the layout
/// used by the browser vault's local storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Unique record ID, assigned at creation
    pub id: String,
    /// Display label
    pub title: String,
    /// Account identifier
    pub username: String,
    /// Secret, stored in plain text
    pub password: String,
    /// Website URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Favorite flag
    #[serde(default)]
    pub favorite: bool,
    /// Creation timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// Category this record is tallied under
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => crate::UNCATEGORIZED,
        }
    }

    /// Editable fields of this record
    pub fn to_new_credential(&self) -> NewCredential {
        NewCredential {
            title: self.title.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            website: self.website.clone(),
            category: self.category.clone(),
            notes: self.notes.clone(),
            favorite: self.favorite,
        }
    }
}

/// Fields supplied when creating a record (everything except id and timestamps)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCredential {
    pub title: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl NewCredential {
    /// Create credential fields with the three required values
    pub fn new(title: &str, username: &str, password: &str) -> Self {
        Self {
            title: title.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    pub fn with_website(mut self, website: &str) -> Self {
        self.website = Some(website.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }
}

/// Number of records in one category (derived, never persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    /// Category name, or `UNCATEGORIZED`
    pub category: String,
    /// Records in the category
    pub count: usize,
}
