/// Tools for logging, listing and deleting mood check-ins

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use chrono::{DateTime, Utc};

use crate::domain::{sort_recent_first, MoodEntry, NewMoodEntry};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::WellnessStore;
use super::{DeleteResponse, EntryIdParams};

/// Parameters for logging a mood
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LogMoodParams {
    /// Mood label or emoji: Amazing, Good, Okay, Not Great, Difficult
    pub mood: String,
    /// Optional note (up to 500 characters)
    pub note: Option<String>,
    /// When the mood was felt, RFC 3339 (defaults to now)
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct LogMoodResponse {
    pub success: bool,
    pub message: String,
    pub entry: MoodEntry,
    pub current_streak: u32,
}

/// Log a mood check-in
pub fn log_mood<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: LogMoodParams,
) -> Result<LogMoodResponse, StorageError> {
    let timestamp = params.timestamp.unwrap_or_else(Utc::now);
    let new_entry = NewMoodEntry::new(&params.mood, params.note, timestamp)?;
    let entry = store.save_mood(new_entry)?;

    let current_streak = store.get_user_stats().current_streak;
    let emoji = entry.level().map(|l| l.emoji()).unwrap_or_default();

    let mut message = format!("Logged mood '{}' {} (value {}).", entry.mood, emoji, entry.value);
    match current_streak {
        0 => {}
        1 => message.push_str(" Your streak starts today."),
        n => message.push_str(&format!(" {} day streak!", n)),
    }

    tracing::info!("Logged mood entry {} with value {}", entry.id, entry.value);

    Ok(LogMoodResponse {
        success: true,
        message,
        entry,
        current_streak,
    })
}

/// Parameters for listing moods
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListMoodsParams {
    /// Maximum number of entries to return, most recent first
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ListMoodsResponse {
    pub entries: Vec<MoodEntry>,
    pub total_count: usize,
    pub message: String,
}

/// List mood entries, most recent first
pub fn list_moods<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: ListMoodsParams,
) -> Result<ListMoodsResponse, StorageError> {
    let mut entries = store.list_moods();
    let total_count = entries.len();
    sort_recent_first(&mut entries);

    if let Some(limit) = params.limit {
        entries.truncate(limit);
    }

    let message = if entries.is_empty() {
        "No moods logged yet.".to_string()
    } else {
        entries
            .iter()
            .map(|e| {
                let label = match e.level() {
                    Some(level) => level.label().to_string(),
                    None => e.mood.clone(),
                };
                let mut line = format!(
                    "{} {} ({}) [{}]",
                    e.timestamp.format("%Y-%m-%d %H:%M"),
                    label,
                    e.value,
                    e.id
                );
                if e.has_note() {
                    line.push_str(&format!(": {}", e.note));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(ListMoodsResponse {
        entries,
        total_count,
        message,
    })
}

/// Delete a mood entry by id
pub fn delete_mood<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: EntryIdParams,
) -> Result<DeleteResponse, StorageError> {
    let deleted = store.delete_mood(params.id.trim())?;
    let message = if deleted {
        format!("Deleted mood entry {}.", params.id.trim())
    } else {
        format!("No mood entry with id {}.", params.id.trim())
    };

    Ok(DeleteResponse {
        success: deleted,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::Duration;

    fn params(mood: &str) -> LogMoodParams {
        LogMoodParams { mood: mood.into(), note: None, timestamp: None }
    }

    #[test]
    fn test_log_mood_reports_streak() {
        let store = WellnessStore::new(MemoryStorage::new());
        let response = log_mood(&store, params("😊")).unwrap();
        assert!(response.success);
        assert_eq!(response.entry.value, 4);
        assert_eq!(response.current_streak, 1);
    }

    #[test]
    fn test_log_mood_rejects_unknown_label() {
        let store = WellnessStore::new(MemoryStorage::new());
        let result = log_mood(&store, params("ecstatic"));
        assert!(matches!(result, Err(StorageError::Domain(_))));
        assert!(store.list_moods().is_empty());
    }

    #[test]
    fn test_list_moods_recent_first_with_limit() {
        let store = WellnessStore::new(MemoryStorage::new());
        let now = Utc::now();
        for (i, label) in ["Difficult", "Okay", "Amazing"].iter().enumerate() {
            let timestamp = now - Duration::hours(3 - i as i64);
            log_mood(&store, LogMoodParams { mood: label.to_string(), note: None, timestamp: Some(timestamp) })
                .unwrap();
        }

        let response = list_moods(&store, ListMoodsParams { limit: Some(2) }).unwrap();
        assert_eq!(response.total_count, 3);
        assert_eq!(response.entries.len(), 2);
        assert_eq!(response.entries[0].mood, "Amazing");
        assert_eq!(response.entries[1].mood, "Okay");
    }

    #[test]
    fn test_delete_mood_not_found() {
        let store = WellnessStore::new(MemoryStorage::new());
        let response = delete_mood(&store, EntryIdParams { id: "missing".into() }).unwrap();
        assert!(!response.success);
    }
}
