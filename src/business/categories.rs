//! Category tallies
//!
//! Record counts per category for the sidebar. Derived from the current
//! record list on every call, never stored.

use crate::error::Result;
use crate::storage::{CategoryTally, CredentialRecord, Persistence};
use super::store::RecordStore;

/// Count records per category
///
/// Records without a category (or with an empty one) are counted under
/// `UNCATEGORIZED`. Tallies are ordered by first appearance.
pub fn tally_categories(records: &[CredentialRecord]) -> Vec<CategoryTally> {
    let mut tallies: Vec<CategoryTally> = Vec::new();

    for record in records {
        let category = record.category_or_default();
        match tallies.iter_mut().find(|t| t.category == category) {
            Some(tally) => tally.count += 1,
            None => tallies.push(CategoryTally {
                category: category.to_string(),
                count: 1,
            }),
        }
    }

    tallies
}

impl<P: Persistence> RecordStore<P> {
    /// Get record counts per category
    pub fn category_tally(&self) -> Result<Vec<CategoryTally>> {
        let records = self.load_records()?;
        Ok(tally_categories(&records))
    }
}
