/// Basic unit tests to verify core functionality
use wellness_tracker_mcp::*;
use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};

fn local_noon(date: NaiveDate) -> chrono::DateTime<Utc> {
    let noon = date.and_hms_opt(12, 0, 0).unwrap();
    Local.from_local_datetime(&noon).earliest().unwrap().with_timezone(&Utc)
}

fn mood_on(date: NaiveDate, value: u8) -> MoodEntry {
    let level = MoodLevel::ALL.iter().find(|l| l.value() == value).copied().unwrap();
    NewMoodEntry::new(level.label(), None, local_noon(date))
        .unwrap()
        .into_entry(EntryId::new())
}

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_mood_entry_creation() {
        let entry = NewMoodEntry::new("Not Great", Some("  tired  ".to_string()), Utc::now());
        let entry = entry.unwrap();
        assert_eq!(entry.value, 2);
        assert_eq!(entry.note, "tired");
    }

    #[test]
    fn test_mood_labels_and_emoji_agree() {
        for level in MoodLevel::ALL {
            assert_eq!(MoodLevel::from_label(level.label()), Some(level));
            assert_eq!(MoodLevel::from_label(level.emoji()), Some(level));
        }
    }

    #[test]
    fn test_long_note_rejected() {
        let note = "a".repeat(MAX_NOTE_CHARS + 1);
        assert!(NewMoodEntry::new("Okay", Some(note), Utc::now()).is_err());
    }

    #[test]
    fn test_journal_draft_validation() {
        assert!(JournalDraft::new(None, "Title", "", Utc::now(), None).is_err());
        let draft = JournalDraft::new(None, " Title ", " Body ", Utc::now(), Some(" ".into())).unwrap();
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.mood, None);
    }

    #[test]
    fn test_streak_today_and_yesterday() {
        let today = local_today();
        let entries = vec![mood_on(today, 4), mood_on(today - Duration::days(1), 3)];
        assert_eq!(calculate_current_streak(&entries, today), 2);
    }

    #[test]
    fn test_streak_zero_when_today_missing() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let entries = vec![mood_on(today - Duration::days(1), 3)];
        assert_eq!(calculate_current_streak(&entries, today), 0);
        assert_eq!(calculate_current_streak(&[], today), 0);
    }

    #[test]
    fn test_average_mood() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let entries = vec![mood_on(day, 5), mood_on(day, 2)];
        assert_eq!(calculate_average_mood(&entries), 3.5);
        assert_eq!(calculate_average_mood(&[]), 0.0);
    }

    #[test]
    fn test_weekly_trend_improving() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let entries: Vec<MoodEntry> = [2u8, 2, 2, 4, 4, 4]
            .iter()
            .enumerate()
            .map(|(i, v)| mood_on(today - Duration::days(5 - i as i64), *v))
            .collect();

        let report = TrendReport::calculate(&entries, TrendWindow::Week, today);
        assert_eq!(report.buckets.len(), 7);
        assert_eq!(report.days_logged(), 6);
        assert_eq!(report.trend, Some(MoodTrend::Improving));
    }

    #[test]
    fn test_settings_merge_keeps_other_fields() {
        let patch = SettingsPatch { theme: Some(Theme::Dark), ..Default::default() };
        let merged = UserSettings::default().merged(&patch);
        assert_eq!(merged.theme, Theme::Dark);
        assert_eq!(merged.breathing_duration, 3);
        assert_eq!(merged.music_volume, 0.7);
    }

    #[test]
    fn test_breathing_session_pause_and_format() {
        let mut session = BreathingSession::new(BreathingPattern::Box, 2);
        assert_eq!(session.format_remaining(), "2:00");

        session.start();
        session.advance(std::time::Duration::from_secs(6));
        assert_eq!(session.phase(), BreathPhase::Hold);
        assert_eq!(session.format_remaining(), "1:54");

        session.pause();
        session.advance(std::time::Duration::from_secs(30));
        assert_eq!(session.format_remaining(), "1:54");
    }

    #[test]
    fn test_prompt_of_the_day_is_stable() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(prompt_of_the_day(date), prompt_of_the_day(date));
        assert_ne!(
            prompt_of_the_day(date).title,
            prompt_of_the_day(date + Duration::days(1)).title
        );
    }
}
