/// Behavioral properties of the wellness store over a real SQLite file
use wellness_tracker_mcp::*;
use chrono::{Duration, Local, TimeZone, Utc};
use tempfile::TempDir;

fn sqlite_store(dir: &TempDir) -> WellnessStore<SqliteStorage> {
    let storage = SqliteStorage::new(dir.path().join("wellness.db")).unwrap();
    WellnessStore::new(storage)
}

fn mood(label: &str) -> NewMoodEntry {
    NewMoodEntry::new(label, None, Utc::now()).unwrap()
}

#[test]
fn test_mood_ids_unique_and_values_in_range() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    for label in ["Amazing", "Good", "Okay", "Not Great", "Difficult", "😄", "😢"] {
        store.save_mood(mood(label)).unwrap();
    }

    let moods = store.list_moods();
    let mut ids: Vec<&str> = moods.iter().map(|m| m.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), moods.len());
    assert!(moods.iter().all(|m| (1..=5).contains(&m.value)));
}

#[test]
fn test_delete_unknown_id_leaves_collection() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    store.save_mood(mood("Okay")).unwrap();
    let before = store.list_moods();

    assert!(!store.delete_mood("does-not-exist").unwrap());
    assert!(!store.delete_journal("does-not-exist").unwrap());
    assert_eq!(store.list_moods(), before);
}

#[test]
fn test_malformed_collection_reads_empty() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    store.storage().set(keys::MOODS, "not json at all").unwrap();

    assert!(store.list_moods().is_empty());
    let stats = store.get_user_stats();
    assert_eq!(stats.total_mood_entries, 0);
    assert_eq!(stats.current_streak, 0);

    // The next save overwrites the corrupt value
    store.save_mood(mood("Good")).unwrap();
    assert_eq!(store.list_moods().len(), 1);
}

#[test]
fn test_journal_edit_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    let a = store
        .save_journal(JournalDraft::new(None, "A", "first", Utc::now(), None).unwrap())
        .unwrap();
    let b = store
        .save_journal(JournalDraft::new(None, "B", "second", Utc::now(), None).unwrap())
        .unwrap();

    store
        .save_journal(JournalDraft::new(Some(a.id.clone()), "A", "edited", Utc::now(), None).unwrap())
        .unwrap();

    let journals = store.list_journals();
    assert_eq!(journals.len(), 2);
    assert_eq!(journals[0].id, a.id);
    assert_eq!(journals[0].content, "edited");
    assert_eq!(journals[1].id, b.id);
}

#[test]
fn test_restore_after_delete_returns_prior_contents() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    store
        .save_journal(JournalDraft::new(None, "Keep", "this", Utc::now(), None).unwrap())
        .unwrap();
    let target = store
        .save_journal(JournalDraft::new(None, "Undo", "me", Utc::now(), Some("Okay".into())).unwrap())
        .unwrap();
    let before = store.list_journals();

    assert!(store.delete_journal(target.id.as_str()).unwrap());
    store.restore_journal(target).unwrap();
    assert_eq!(store.list_journals(), before);
}

#[test]
fn test_streak_counts_consecutive_local_days() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    let today = local_today();

    for days_ago in [0i64, 1, 3] {
        let noon = (today - Duration::days(days_ago)).and_hms_opt(12, 0, 0).unwrap();
        let timestamp = Local.from_local_datetime(&noon).earliest().unwrap().with_timezone(&Utc);
        store.save_mood(NewMoodEntry::new("Good", None, timestamp).unwrap()).unwrap();
    }

    assert_eq!(store.get_user_stats().current_streak, 2);
    assert_eq!(store.user_stats_on(today + Duration::days(1)).current_streak, 0);
}

#[test]
fn test_stats_totals_and_last_entries() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    store.save_mood(mood("Amazing")).unwrap();
    let last = store.save_mood(mood("Okay")).unwrap();
    store
        .save_journal(JournalDraft::new(None, "T", "C", Utc::now(), None).unwrap())
        .unwrap();

    let stats = store.get_user_stats();
    assert_eq!(stats.total_mood_entries, 2);
    assert_eq!(stats.total_journal_entries, 1);
    assert_eq!(stats.average_mood, 4.0);
    assert_eq!(stats.last_mood_entry, Some(last));
    assert!(stats.last_journal_entry.is_some());
}

#[test]
fn test_settings_round_trip_through_sqlite() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    let before = store.get_settings();

    let patch = SettingsPatch { reminder_time: Some("07:30".into()), ..Default::default() };
    store.update_settings(&patch).unwrap();

    assert_eq!(
        store.get_settings(),
        UserSettings { reminder_time: "07:30".into(), ..before }
    );
}

#[test]
fn test_import_is_all_or_nothing() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    store.toggle_favorite("kept").unwrap();

    let bad_mood = MoodEntry {
        id: EntryId::from_string("m1"),
        mood: "Off the scale".into(),
        note: String::new(),
        timestamp: Utc::now(),
        value: 9,
    };
    let snapshot = UserDataExport {
        moods: Some(vec![bad_mood]),
        favorites: Some(vec!["replaced".into()]),
        ..Default::default()
    };

    assert!(!store.import_all(&snapshot));
    assert_eq!(store.list_favorites(), vec!["kept".to_string()]);
    assert!(store.list_moods().is_empty());
}

#[test]
fn test_export_import_between_databases() {
    let source_dir = TempDir::new().unwrap();
    let source = sqlite_store(&source_dir);
    source.save_mood(mood("Good")).unwrap();
    source.save_uplift_prompt(PROMPT_LIBRARY[2].to_new(Utc::now())).unwrap();
    source.toggle_favorite("chill-2").unwrap();

    let json = serde_json::to_string(&source.export_all()).unwrap();
    let snapshot: UserDataExport = serde_json::from_str(&json).unwrap();

    let target_dir = TempDir::new().unwrap();
    let target = sqlite_store(&target_dir);
    assert!(target.import_all(&snapshot));
    assert_eq!(target.list_moods(), source.list_moods());
    assert_eq!(target.list_saved_prompts(), source.list_saved_prompts());
    assert_eq!(target.list_favorites(), source.list_favorites());
}

#[test]
fn test_clear_all_removes_every_key() {
    let dir = TempDir::new().unwrap();
    let store = sqlite_store(&dir);
    store.save_mood(mood("Good")).unwrap();
    store.toggle_favorite("x").unwrap();

    store.clear_all().unwrap();
    assert!(store.storage().keys().unwrap().is_empty());
    assert_eq!(store.get_settings(), UserSettings::default());
}
