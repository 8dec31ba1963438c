/// MoodEntry entity for tracking mood check-ins
///
/// This module defines the five-level mood scale and the MoodEntry struct
/// that records a single check-in with an optional note.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{EntryId, DomainError};

/// Maximum note length in characters
pub const MAX_NOTE_CHARS: usize = 500;

/// The five-step mood scale
///
/// Each level maps to a fixed value from 1 (Difficult) to 5 (Amazing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLevel {
    Amazing,
    Good,
    Okay,
    NotGreat,
    Difficult,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Amazing,
        MoodLevel::Good,
        MoodLevel::Okay,
        MoodLevel::NotGreat,
        MoodLevel::Difficult,
    ];

    /// Numeric value on the 1-5 scale
    pub fn value(&self) -> u8 {
        match self {
            MoodLevel::Amazing => 5,
            MoodLevel::Good => 4,
            MoodLevel::Okay => 3,
            MoodLevel::NotGreat => 2,
            MoodLevel::Difficult => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodLevel::Amazing => "Amazing",
            MoodLevel::Good => "Good",
            MoodLevel::Okay => "Okay",
            MoodLevel::NotGreat => "Not Great",
            MoodLevel::Difficult => "Difficult",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLevel::Amazing => "😄",
            MoodLevel::Good => "😊",
            MoodLevel::Okay => "😐",
            MoodLevel::NotGreat => "😟",
            MoodLevel::Difficult => "😢",
        }
    }

    /// Parse a mood from its emoji or its (case-insensitive) name
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL.into_iter().find(|level| {
            level.emoji() == trimmed || level.label().eq_ignore_ascii_case(trimmed)
        })
    }

    /// The level whose value is closest to an averaged score
    pub fn nearest(score: f64) -> Option<Self> {
        if !score.is_finite() {
            return None;
        }
        let rounded = score.round().clamp(1.0, 5.0) as u8;
        Self::ALL.into_iter().find(|level| level.value() == rounded)
    }
}

/// A recorded mood check-in
///
/// The value is derived from the mood label once, at creation time, and is
/// never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: EntryId,
    /// Canonical label, e.g. "Not Great"; imported entries may hold other spellings
    pub mood: String,
    #[serde(default)]
    pub note: String,
    pub timestamp: DateTime<Utc>,
    pub value: u8,
}

/// A mood check-in that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewMoodEntry {
    pub mood: String,
    pub note: String,
    pub timestamp: DateTime<Utc>,
    pub value: u8,
}

impl NewMoodEntry {
    /// Create a new mood check-in with validation
    ///
    /// The note is trimmed. Any accepted spelling of the mood is stored as
    /// its canonical label, with the value looked up from it.
    pub fn new(
        mood: &str,
        note: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let level = MoodLevel::from_label(mood).ok_or_else(|| {
            DomainError::InvalidMood(format!(
                "'{}' is not one of Amazing, Good, Okay, Not Great, Difficult",
                mood.trim()
            ))
        })?;

        let note = note.map(|n| n.trim().to_string()).unwrap_or_default();
        Self::validate_note(&note)?;

        Ok(Self {
            mood: level.label().to_string(),
            note,
            timestamp,
            value: level.value(),
        })
    }

    /// Attach an id, turning this into a storable entry
    pub fn into_entry(self, id: EntryId) -> MoodEntry {
        MoodEntry {
            id,
            mood: self.mood,
            note: self.note,
            timestamp: self.timestamp,
            value: self.value,
        }
    }

    fn validate_note(note: &str) -> Result<(), DomainError> {
        if note.chars().count() > MAX_NOTE_CHARS {
            return Err(DomainError::Validation {
                message: format!("Note cannot be longer than {} characters", MAX_NOTE_CHARS),
            });
        }
        Ok(())
    }
}

impl MoodEntry {
    pub fn level(&self) -> Option<MoodLevel> {
        MoodLevel::ALL.into_iter().find(|l| l.value() == self.value)
    }

    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}

/// Sort mood entries newest first (display order)
pub fn sort_recent_first(entries: &mut [MoodEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
