/// JournalEntry entity and the draft used to create or edit one

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{EntryId, DomainError};

/// A saved journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// A journal entry as submitted for saving
///
/// Carrying an id means "edit": if the id matches a stored entry that entry
/// is replaced in place. Without a matching id the draft becomes a new entry.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalDraft {
    pub id: Option<EntryId>,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub mood: Option<String>,
}

impl JournalDraft {
    /// Create a validated draft; title and content are trimmed
    pub fn new(
        id: Option<EntryId>,
        title: &str,
        content: &str,
        timestamp: DateTime<Utc>,
        mood: Option<String>,
    ) -> Result<Self, DomainError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(DomainError::InvalidJournal("Title cannot be empty".to_string()));
        }
        if content.is_empty() {
            return Err(DomainError::InvalidJournal("Content cannot be empty".to_string()));
        }

        Ok(Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            timestamp,
            mood: mood
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
        })
    }

    pub fn into_entry(self, id: EntryId) -> JournalEntry {
        JournalEntry {
            id,
            title: self.title,
            content: self.content,
            timestamp: self.timestamp,
            mood: self.mood,
        }
    }
}

impl JournalEntry {
    /// Case-insensitive match against title or content
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}
