/// Basic integration tests
use wellness_tracker_mcp::*;
use tempfile::TempDir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_server_basic_workflow() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let server = WellnessTrackerServer::new(temp_dir.path().join("wellness.db"))
            .await
            .expect("Failed to create server");

        let store = server.store();
        store
            .save_mood(NewMoodEntry::new("Good", None, Utc::now()).unwrap())
            .unwrap();

        let stats = store.get_user_stats();
        let trend = store.mood_trend(TrendWindow::Week);
        let insights = server.analytics().generate_insights(&stats, &trend);
        assert_eq!(stats.total_mood_entries, 1);
        assert!(!insights.is_empty());
    }

    #[tokio::test]
    async fn test_database_persistence() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("wellness.db");

        let saved = {
            let server = WellnessTrackerServer::new(db_path.clone())
                .await
                .expect("Failed to create first server");
            server.store().toggle_favorite("ambient-1").unwrap();
            server
                .store()
                .save_journal(JournalDraft::new(None, "Persist", "me", Utc::now(), None).unwrap())
                .unwrap()
        };

        let server2 = WellnessTrackerServer::new(db_path)
            .await
            .expect("Failed to create second server");
        assert_eq!(server2.store().list_journals(), vec![saved]);
        assert!(server2.store().is_favorite("ambient-1"));
    }

    #[test]
    fn test_storage_interface() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = SqliteStorage::new(temp_dir.path().join("kv.db")).unwrap();

        storage.set(keys::FAVORITES, r#"["a"]"#).unwrap();
        assert_eq!(storage.get(keys::FAVORITES).unwrap().as_deref(), Some(r#"["a"]"#));
        storage.remove(keys::FAVORITES).unwrap();
        assert_eq!(storage.get(keys::FAVORITES).unwrap(), None);
    }
}
