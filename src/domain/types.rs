/// Core identifier and time helpers used throughout the domain layer
///
/// Entry ids are opaque strings: freshly created entries get a UUID v4, while
/// entries loaded from storage or imported from a backup keep whatever id
/// they were saved with.

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Local, NaiveDate, Utc};
use uuid::Uuid;

/// Unique identifier for a stored record (mood, journal or saved prompt)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Generate a new random entry ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id string
    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

/// The local calendar day a stored instant falls on
///
/// Streaks and trend buckets are computed on local calendar days, so every
/// timestamp is converted to the local time zone before truncating.
pub fn local_day(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Today's date in the local time zone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = EntryId::new();
        let b = EntryId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = EntryId::from_string("1700000000000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1700000000000\"");
    }
}
