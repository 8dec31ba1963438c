/// Backup export/import and full reset for the wellness store

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::domain::{DomainError, JournalEntry, MoodEntry, UpliftPrompt, UserSettings};
use crate::storage::{keys, KeyValueStore, StorageError};
use super::WellnessStore;

/// A snapshot of every collection, used for backup and restore
///
/// On import every field is optional; only the fields present are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataExport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moods: Option<Vec<MoodEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journals: Option<Vec<JournalEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_prompts: Option<Vec<UpliftPrompt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
}

impl UserDataExport {
    /// Reject snapshots that would break the collection invariants
    fn validate(&self) -> Result<(), DomainError> {
        if let Some(ref moods) = self.moods {
            if let Some(bad) = moods.iter().find(|m| !(1..=5).contains(&m.value)) {
                return Err(DomainError::Validation {
                    message: format!("Mood entry {} has value {} outside 1-5", bad.id, bad.value),
                });
            }
            ensure_unique("mood", moods.iter().map(|m| m.id.as_str()))?;
        }
        if let Some(ref journals) = self.journals {
            ensure_unique("journal", journals.iter().map(|j| j.id.as_str()))?;
        }
        if let Some(ref settings) = self.settings {
            settings.validate()?;
        }
        Ok(())
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::Validation {
                message: format!("Duplicate {} id '{}'", kind, id),
            });
        }
    }
    Ok(())
}

impl<S: KeyValueStore> WellnessStore<S> {
    /// Bundle every collection with the export time
    pub fn export_all(&self) -> UserDataExport {
        UserDataExport {
            moods: Some(self.list_moods()),
            journals: Some(self.list_journals()),
            saved_prompts: Some(self.list_saved_prompts()),
            favorites: Some(self.list_favorites()),
            settings: Some(self.get_settings()),
            export_date: Some(Utc::now()),
        }
    }

    /// Overwrite each collection present in the snapshot
    ///
    /// Returns false, with nothing written, if any field fails to validate,
    /// serialize or persist.
    pub fn import_all(&self, snapshot: &UserDataExport) -> bool {
        match self.try_import(snapshot) {
            Ok(count) => {
                tracing::info!("Imported {} collections from backup", count);
                self.refresh_stats_cache();
                true
            }
            Err(e) => {
                tracing::error!("Failed to import user data: {}", e);
                false
            }
        }
    }

    fn try_import(&self, snapshot: &UserDataExport) -> Result<usize, StorageError> {
        snapshot.validate()?;

        let mut entries: Vec<(&str, String)> = Vec::new();
        if let Some(ref moods) = snapshot.moods {
            entries.push((keys::MOODS, serde_json::to_string(moods)?));
        }
        if let Some(ref journals) = snapshot.journals {
            entries.push((keys::JOURNALS, serde_json::to_string(journals)?));
        }
        if let Some(ref prompts) = snapshot.saved_prompts {
            entries.push((keys::SAVED_PROMPTS, serde_json::to_string(prompts)?));
        }
        if let Some(ref favorites) = snapshot.favorites {
            entries.push((keys::FAVORITES, serde_json::to_string(favorites)?));
        }
        if let Some(ref settings) = snapshot.settings {
            entries.push((keys::SETTINGS, serde_json::to_string(settings)?));
        }

        if !entries.is_empty() {
            self.storage.set_many(&entries)?;
        }
        Ok(entries.len())
    }

    /// Remove every key this store owns
    pub fn clear_all(&self) -> Result<(), StorageError> {
        for key in keys::ALL {
            self.storage.remove(key)?;
        }
        tracing::info!("Cleared all wellness data");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryId, JournalDraft, NewMoodEntry, SettingsPatch, PROMPT_LIBRARY};
    use crate::storage::MemoryStorage;

    fn populated() -> WellnessStore<MemoryStorage> {
        let store = WellnessStore::new(MemoryStorage::new());
        store.save_mood(NewMoodEntry::new("Good", Some("ok".into()), Utc::now()).unwrap()).unwrap();
        store.save_mood(NewMoodEntry::new("😢", None, Utc::now()).unwrap()).unwrap();
        store
            .save_journal(JournalDraft::new(None, "Title", "Body", Utc::now(), Some("Good".into())).unwrap())
            .unwrap();
        store.save_uplift_prompt(PROMPT_LIBRARY[1].to_new(Utc::now())).unwrap();
        store.toggle_favorite("ambient-3").unwrap();
        store
            .update_settings(&SettingsPatch { breathing_duration: Some(5), ..Default::default() })
            .unwrap();
        store
    }

    #[test]
    fn test_export_import_round_trip() {
        let source = populated();
        let snapshot = source.export_all();
        assert!(snapshot.export_date.is_some());

        let target = WellnessStore::new(MemoryStorage::new());
        assert!(target.import_all(&snapshot));

        assert_eq!(target.list_moods(), source.list_moods());
        assert_eq!(target.list_journals(), source.list_journals());
        assert_eq!(target.list_saved_prompts(), source.list_saved_prompts());
        assert_eq!(target.list_favorites(), source.list_favorites());
        assert_eq!(target.get_settings(), source.get_settings());
    }

    #[test]
    fn test_import_only_touches_present_fields() {
        let store = populated();
        let journals = store.list_journals();

        let snapshot = UserDataExport { favorites: Some(vec!["chill-1".into()]), ..Default::default() };
        assert!(store.import_all(&snapshot));

        assert_eq!(store.list_favorites(), vec!["chill-1".to_string()]);
        assert_eq!(store.list_journals(), journals);
    }

    #[test]
    fn test_import_rejects_duplicate_ids() {
        let store = populated();
        let before = store.list_moods();
        let mut moods = before.clone();
        moods.push(moods[0].clone());

        let snapshot = UserDataExport {
            moods: Some(moods),
            favorites: Some(vec![]),
            ..Default::default()
        };
        assert!(!store.import_all(&snapshot));
        assert_eq!(store.list_moods(), before);
        assert_eq!(store.list_favorites(), vec!["ambient-3".to_string()]);
    }

    #[test]
    fn test_import_over_quota_writes_nothing() {
        let store = WellnessStore::new(MemoryStorage::with_quota(200));
        let journal = JournalEntry {
            id: EntryId::from_string("j1"),
            title: "t".into(),
            content: "x".repeat(300),
            timestamp: Utc::now(),
            mood: None,
        };
        let snapshot = UserDataExport {
            favorites: Some(vec!["a".into()]),
            journals: Some(vec![journal]),
            ..Default::default()
        };

        assert!(!store.import_all(&snapshot));
        assert!(store.list_favorites().is_empty());
        assert!(store.list_journals().is_empty());
    }

    #[test]
    fn test_import_accepts_partial_settings() {
        let store = WellnessStore::new(MemoryStorage::new());
        let snapshot: UserDataExport =
            serde_json::from_str(r#"{"settings":{"musicVolume":0.2},"exportDate":"2024-01-01T00:00:00Z"}"#)
                .unwrap();
        assert!(store.import_all(&snapshot));
        let settings = store.get_settings();
        assert_eq!(settings.music_volume, 0.2);
        assert_eq!(settings.reminder_time, "20:00");
    }

    #[test]
    fn test_import_rejects_out_of_range_settings() {
        let store = populated();
        let before = store.get_settings();
        let favorites = store.list_favorites();

        let snapshot: UserDataExport = serde_json::from_str(
            r#"{"settings":{"musicVolume":5.0,"breathingDuration":0,"reminderTime":"nope"},"favorites":[]}"#,
        )
        .unwrap();
        assert!(!store.import_all(&snapshot));
        assert_eq!(store.get_settings(), before);
        assert_eq!(store.list_favorites(), favorites);

        for bad in [
            r#"{"settings":{"musicVolume":1.5}}"#,
            r#"{"settings":{"breathingDuration":61}}"#,
            r#"{"settings":{"reminderTime":"25:00"}}"#,
        ] {
            let snapshot: UserDataExport = serde_json::from_str(bad).unwrap();
            assert!(!store.import_all(&snapshot), "accepted {}", bad);
        }
        assert_eq!(store.get_settings(), before);
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let store = populated();
        store.clear_all().unwrap();
        store.clear_all().unwrap();

        assert!(store.storage().is_empty());
        assert!(store.list_moods().is_empty());
        assert_eq!(store.get_settings(), UserSettings::default());
    }
}
