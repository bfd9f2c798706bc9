//! Common utility functions

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Get current UTC datetime at millisecond precision
///
/// Records are persisted with millisecond timestamps, so anything stamped
/// in memory is truncated to match its stored form.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Timestamp for a mutation of a record last updated at `previous`
///
/// Always strictly later than `previous`, even when the clock has not
/// advanced a full millisecond since the last write. `None` if `previous`
/// is the last representable instant.
pub fn next_update_timestamp(previous: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let current = now();
    if current > previous {
        Some(current)
    } else {
        previous.checked_add_signed(Duration::milliseconds(1))
    }
}
