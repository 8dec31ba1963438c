/// The wellness data store
///
/// A synchronous facade over a key-value medium. Every read re-parses the
/// stored JSON and every write re-serializes the whole collection, so the
/// store itself holds no state between calls.

mod backup;

pub use backup::UserDataExport;

use serde::de::DeserializeOwned;
use serde::Serialize;
use chrono::{NaiveDate, Utc};

use crate::domain::{
    local_today, EntryId, JournalDraft, JournalEntry, MoodEntry, NewMoodEntry,
    NewUpliftPrompt, SettingsPatch, StatsSnapshot, TrendReport, TrendWindow,
    UpliftPrompt, UserSettings, UserStats,
};
use crate::storage::{keys, KeyValueStore, StorageError};

/// Owns every persisted wellness record and derives statistics from them
pub struct WellnessStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> WellnessStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get a reference to the underlying medium (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ===== Mood entries =====

    /// Append a mood check-in with a fresh id
    pub fn save_mood(&self, entry: NewMoodEntry) -> Result<MoodEntry, StorageError> {
        let mut moods = self.list_moods();
        let id = fresh_id(|id| moods.iter().any(|m| &m.id == id));
        let mood = entry.into_entry(id);
        moods.push(mood.clone());

        self.write_json(keys::MOODS, &moods)?;
        self.refresh_stats_cache();

        tracing::debug!("Saved mood entry {} (value {})", mood.id, mood.value);
        Ok(mood)
    }

    /// All mood entries in storage order
    pub fn list_moods(&self) -> Vec<MoodEntry> {
        self.read_collection(keys::MOODS)
    }

    /// Remove a mood entry; false when no entry had that id
    pub fn delete_mood(&self, id: &str) -> Result<bool, StorageError> {
        let moods = self.list_moods();
        let before = moods.len();
        let remaining: Vec<MoodEntry> = moods.into_iter().filter(|m| m.id.as_str() != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.write_json(keys::MOODS, &remaining)?;
        tracing::debug!("Deleted mood entry {}", id);
        Ok(true)
    }

    // ===== Journal entries =====

    /// Save a journal draft
    ///
    /// A draft whose id matches a stored entry replaces that entry in place.
    /// Anything else is appended under a newly assigned id.
    pub fn save_journal(&self, draft: JournalDraft) -> Result<JournalEntry, StorageError> {
        let mut journals = self.list_journals();

        let existing_index = draft
            .id
            .as_ref()
            .and_then(|id| journals.iter().position(|j| &j.id == id));

        let entry = match existing_index {
            Some(index) => {
                let id = journals[index].id.clone();
                let entry = draft.into_entry(id);
                journals[index] = entry.clone();
                tracing::debug!("Updated journal entry {}", entry.id);
                entry
            }
            None => {
                let id = fresh_id(|id| journals.iter().any(|j| &j.id == id));
                let entry = draft.into_entry(id);
                journals.push(entry.clone());
                tracing::debug!("Created journal entry {}", entry.id);
                entry
            }
        };

        self.write_json(keys::JOURNALS, &journals)?;
        self.refresh_stats_cache();
        Ok(entry)
    }

    /// Put back a previously deleted journal entry, keeping its id
    ///
    /// If an entry with the same id exists it is replaced in place.
    pub fn restore_journal(&self, entry: JournalEntry) -> Result<JournalEntry, StorageError> {
        let mut journals = self.list_journals();
        match journals.iter().position(|j| j.id == entry.id) {
            Some(index) => journals[index] = entry.clone(),
            None => journals.push(entry.clone()),
        }

        self.write_json(keys::JOURNALS, &journals)?;
        self.refresh_stats_cache();
        tracing::debug!("Restored journal entry {}", entry.id);
        Ok(entry)
    }

    pub fn list_journals(&self) -> Vec<JournalEntry> {
        self.read_collection(keys::JOURNALS)
    }

    /// Journal entries whose title or content contains `term`
    pub fn search_journals(&self, term: &str) -> Vec<JournalEntry> {
        self.list_journals()
            .into_iter()
            .filter(|j| j.matches(term))
            .collect()
    }

    pub fn delete_journal(&self, id: &str) -> Result<bool, StorageError> {
        let journals = self.list_journals();
        let before = journals.len();
        let remaining: Vec<JournalEntry> =
            journals.into_iter().filter(|j| j.id.as_str() != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.write_json(keys::JOURNALS, &remaining)?;
        tracing::debug!("Deleted journal entry {}", id);
        Ok(true)
    }

    // ===== Saved prompts =====

    pub fn save_uplift_prompt(&self, prompt: NewUpliftPrompt) -> Result<UpliftPrompt, StorageError> {
        let mut prompts = self.list_saved_prompts();
        let id = fresh_id(|id| prompts.iter().any(|p| &p.id == id));
        let saved = prompt.into_prompt(id);
        prompts.push(saved.clone());

        self.write_json(keys::SAVED_PROMPTS, &prompts)?;
        tracing::debug!("Saved uplift prompt '{}'", saved.title);
        Ok(saved)
    }

    pub fn list_saved_prompts(&self) -> Vec<UpliftPrompt> {
        self.read_collection(keys::SAVED_PROMPTS)
    }

    // ===== Favorites =====

    pub fn list_favorites(&self) -> Vec<String> {
        self.read_collection(keys::FAVORITES)
    }

    pub fn is_favorite(&self, track_id: &str) -> bool {
        self.list_favorites().iter().any(|f| f == track_id)
    }

    /// Flip membership of `track_id`; returns true when it is now a favorite
    pub fn toggle_favorite(&self, track_id: &str) -> Result<bool, StorageError> {
        let favorites = self.list_favorites();
        let was_favorite = favorites.iter().any(|f| f == track_id);

        let updated: Vec<String> = if was_favorite {
            favorites.into_iter().filter(|f| f != track_id).collect()
        } else {
            let mut with_track = favorites;
            with_track.push(track_id.to_string());
            with_track
        };

        self.write_json(keys::FAVORITES, &updated)?;
        Ok(!was_favorite)
    }

    // ===== Settings =====

    /// The stored settings merged over the defaults
    pub fn get_settings(&self) -> UserSettings {
        self.read_record(keys::SETTINGS).unwrap_or_default()
    }

    /// Apply a validated partial update and persist the full record
    pub fn update_settings(&self, patch: &SettingsPatch) -> Result<UserSettings, StorageError> {
        patch.validate()?;
        let updated = self.get_settings().merged(patch);
        self.write_json(keys::SETTINGS, &updated)?;
        tracing::debug!("Updated settings: {:?}", patch);
        Ok(updated)
    }

    // ===== Statistics =====

    /// Stats as of the current local day
    pub fn get_user_stats(&self) -> UserStats {
        self.user_stats_on(local_today())
    }

    /// Stats with the streak walk starting from `today`
    pub fn user_stats_on(&self, today: NaiveDate) -> UserStats {
        UserStats::calculate(&self.list_moods(), &self.list_journals(), today)
    }

    /// Day-bucketed mood trend for the window ending today
    pub fn mood_trend(&self, window: TrendWindow) -> TrendReport {
        TrendReport::calculate(&self.list_moods(), window, local_today())
    }

    /// Write the advisory stats cache; failures are logged and ignored
    fn refresh_stats_cache(&self) {
        let snapshot = StatsSnapshot {
            stats: self.get_user_stats(),
            last_updated: Utc::now(),
        };
        if let Err(e) = self.write_json(keys::USER_STATS, &snapshot) {
            tracing::warn!("Failed to update stats cache: {}", e);
        }
    }

    // ===== Raw access helpers =====

    /// Parse a JSON array under `key`; absent, unreadable or malformed data
    /// reads as empty
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read_record(key).unwrap_or_default()
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read '{}', treating as empty: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Malformed data under '{}', treating as empty: {}", key, e);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json)
    }
}

/// A new id that `taken` does not report as already used
fn fresh_id(taken: impl Fn(&EntryId) -> bool) -> EntryId {
    loop {
        let id = EntryId::new();
        if !taken(&id) {
            return id;
        }
    }
}
