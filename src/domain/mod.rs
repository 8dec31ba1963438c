/// Domain module containing core wellness data types and calculations
///
/// This module defines the core entities (MoodEntry, JournalEntry, UpliftPrompt,
/// UserSettings) and their validation rules, the built-in prompt and track
/// catalogs, the derived statistics (streak, average mood, trends) and the
/// breathing session state machine.

pub mod types;
pub mod mood;
pub mod journal;
pub mod prompt;
pub mod track;
pub mod settings;
pub mod stats;
pub mod trend;
pub mod breathing;

// Re-export public types for easy access
pub use types::*;
pub use mood::*;
pub use journal::*;
pub use prompt::*;
pub use track::*;
pub use settings::*;
pub use stats::*;
pub use trend::*;
pub use breathing::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Invalid journal entry: {0}")]
    InvalidJournal(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}
