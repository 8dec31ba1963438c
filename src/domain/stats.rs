/// Derived user statistics: streak, average mood and last entries
///
/// This module defines the UserStats struct and the calculations behind it.
/// Stats are never the source of truth; they are recomputed from the mood and
/// journal collections every time they are requested.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::{local_day, JournalEntry, MoodEntry};

/// Summary statistics for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_mood_entries: usize,
    pub total_journal_entries: usize,
    /// Consecutive days, ending today, with at least one mood entry
    pub current_streak: u32,
    /// Mean of all mood values, 0 when there are none
    pub average_mood: f64,
    /// Last entry in storage order
    pub last_mood_entry: Option<MoodEntry>,
    pub last_journal_entry: Option<JournalEntry>,
}

/// The stats record as written to the advisory cache key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    #[serde(flatten)]
    pub stats: UserStats,
    pub last_updated: DateTime<Utc>,
}

impl UserStats {
    /// Stats for an empty store
    pub fn empty() -> Self {
        Self {
            total_mood_entries: 0,
            total_journal_entries: 0,
            current_streak: 0,
            average_mood: 0.0,
            last_mood_entry: None,
            last_journal_entry: None,
        }
    }

    /// Calculate stats from the stored collections
    ///
    /// `today` is the local calendar day the streak walk starts from.
    pub fn calculate(moods: &[MoodEntry], journals: &[JournalEntry], today: NaiveDate) -> Self {
        Self {
            total_mood_entries: moods.len(),
            total_journal_entries: journals.len(),
            current_streak: calculate_current_streak(moods, today),
            average_mood: calculate_average_mood(moods),
            last_mood_entry: moods.last().cloned(),
            last_journal_entry: journals.last().cloned(),
        }
    }

    /// Get a motivational message based on current streak status
    pub fn motivational_message(&self) -> String {
        match self.current_streak {
            0 => "Ready to start your streak! Check in with yourself today.".to_string(),
            1 => "Great start! One day down, keep checking in.".to_string(),
            2..=6 => format!("Nice work! {} days in a row. You're building a steady routine.", self.current_streak),
            7..=13 => format!("Excellent! {} days strong. You're in the groove now!", self.current_streak),
            14..=29 => format!("Amazing! {} days straight. Checking in is becoming second nature.", self.current_streak),
            _ => format!("Incredible! {} days of showing up for yourself.", self.current_streak),
        }
    }
}

/// Count consecutive local days, ending today, that have a mood entry
///
/// The walk starts at `today` and stops at the first day without an entry,
/// so a missing entry today means a streak of 0.
pub fn calculate_current_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let logged_days: HashSet<NaiveDate> = entries
        .iter()
        .map(|e| local_day(&e.timestamp))
        .collect();

    let mut current_streak = 0;
    let mut checking_date = today;

    // Terminates at the first gap; logged_days is finite
    while logged_days.contains(&checking_date) {
        current_streak += 1;
        checking_date = match checking_date.pred_opt() {
            Some(previous) => previous,
            None => break,
        };
    }

    current_streak
}

/// Arithmetic mean of all mood values; 0 for no entries
pub fn calculate_average_mood(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u32 = entries.iter().map(|e| e.value as u32).sum();
    sum as f64 / entries.len() as f64
}
