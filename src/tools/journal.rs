/// Tools for writing, searching, deleting and restoring journal entries

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use chrono::{DateTime, Utc};

use crate::domain::{DomainError, EntryId, JournalDraft, JournalEntry};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::WellnessStore;
use super::EntryIdParams;

/// Parameters for saving a journal entry
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveJournalParams {
    /// Id of an existing entry to edit; omit to create a new entry
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    /// Optional mood label to attach; an edit keeps the stored mood unless
    /// this is given, and "" clears it
    pub mood: Option<String>,
    /// Entry time, RFC 3339 (defaults to now, or to the stored time on edit)
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct SaveJournalResponse {
    pub success: bool,
    pub message: String,
    pub entry: JournalEntry,
    pub updated: bool,
}

/// Create or edit a journal entry
///
/// When editing, a missing timestamp or mood keeps the stored entry's value.
pub fn save_journal<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: SaveJournalParams,
) -> Result<SaveJournalResponse, StorageError> {
    let id = params
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(EntryId::from_string);
    let requested_id = id.clone();

    let existing = id
        .as_ref()
        .and_then(|id| store.list_journals().into_iter().find(|j| &j.id == id));
    let (timestamp, mood) = match existing {
        Some(stored) => (
            params.timestamp.unwrap_or(stored.timestamp),
            params.mood.or(stored.mood),
        ),
        None => (params.timestamp.unwrap_or_else(Utc::now), params.mood),
    };

    let draft = JournalDraft::new(id, &params.title, &params.content, timestamp, mood)?;
    let entry = store.save_journal(draft)?;

    let updated = requested_id.as_ref() == Some(&entry.id);
    let message = if updated {
        format!("Updated journal entry '{}'.", entry.title)
    } else {
        format!("Saved journal entry '{}' ({}).", entry.title, entry.id)
    };

    Ok(SaveJournalResponse {
        success: true,
        message,
        entry,
        updated,
    })
}

/// Parameters for listing journal entries
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListJournalsParams {
    /// Only return entries whose title or content contains this text
    pub search: Option<String>,
    /// Maximum number of entries to return, most recent first
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ListJournalsResponse {
    pub entries: Vec<JournalEntry>,
    pub total_count: usize,
    pub message: String,
}

/// List journal entries, most recent first, optionally filtered
pub fn list_journals<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: ListJournalsParams,
) -> Result<ListJournalsResponse, StorageError> {
    let mut entries = match params.search {
        Some(ref term) => store.search_journals(term),
        None => store.list_journals(),
    };
    let total_count = entries.len();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if let Some(limit) = params.limit {
        entries.truncate(limit);
    }

    let message = if entries.is_empty() {
        match params.search {
            Some(term) => format!("No journal entries match '{}'.", term),
            None => "No journal entries yet.".to_string(),
        }
    } else {
        entries
            .iter()
            .map(|e| format!("{} {} [{}]", e.timestamp.format("%Y-%m-%d"), e.title, e.id))
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(ListJournalsResponse {
        entries,
        total_count,
        message,
    })
}

#[derive(Debug, Serialize)]
pub struct DeleteJournalResponse {
    pub success: bool,
    pub message: String,
    /// The removed entry, which can be passed back to `journal_restore`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<JournalEntry>,
}

/// Delete a journal entry by id
pub fn delete_journal<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: EntryIdParams,
) -> Result<DeleteJournalResponse, StorageError> {
    let id = params.id.trim();
    let existing = store.list_journals().into_iter().find(|j| j.id.as_str() == id);

    let deleted = store.delete_journal(id)?;
    let message = if deleted {
        format!("Deleted journal entry {}.", id)
    } else {
        format!("No journal entry with id {}.", id)
    };

    Ok(DeleteJournalResponse {
        success: deleted,
        message,
        deleted: existing.filter(|_| deleted),
    })
}

/// Parameters for restoring a deleted journal entry
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RestoreJournalParams {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub mood: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RestoreJournalResponse {
    pub success: bool,
    pub message: String,
    pub entry: JournalEntry,
}

/// Put a deleted journal entry back under its original id
pub fn restore_journal<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: RestoreJournalParams,
) -> Result<RestoreJournalResponse, StorageError> {
    let id = params.id.trim();
    if id.is_empty() {
        return Err(DomainError::InvalidJournal("Id cannot be empty".to_string()).into());
    }

    let entry = JournalEntry {
        id: EntryId::from_string(id),
        title: params.title,
        content: params.content,
        timestamp: params.timestamp,
        mood: params.mood,
    };
    let entry = store.restore_journal(entry)?;

    Ok(RestoreJournalResponse {
        success: true,
        message: format!("Restored journal entry '{}'.", entry.title),
        entry,
    })
}
