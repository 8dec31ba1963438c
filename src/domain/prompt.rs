/// Uplift prompts: the built-in library and the saved-prompt record

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use crate::domain::EntryId;

/// A prompt the user saved from the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpliftPrompt {
    pub id: EntryId,
    /// Category label (e.g. "gratitude")
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
    pub saved_at: DateTime<Utc>,
}

/// A prompt to be saved (no id yet)
#[derive(Debug, Clone, PartialEq)]
pub struct NewUpliftPrompt {
    pub kind: String,
    pub title: String,
    pub content: String,
    pub saved_at: DateTime<Utc>,
}

impl NewUpliftPrompt {
    pub fn into_prompt(self, id: EntryId) -> UpliftPrompt {
        UpliftPrompt {
            id,
            kind: self.kind,
            title: self.title,
            content: self.content,
            saved_at: self.saved_at,
        }
    }
}

/// An entry in the built-in prompt library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryPrompt {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

impl LibraryPrompt {
    /// Prepare this prompt for saving at the given instant
    pub fn to_new(&self, saved_at: DateTime<Utc>) -> NewUpliftPrompt {
        NewUpliftPrompt {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            content: self.content.to_string(),
            saved_at,
        }
    }
}

pub const PROMPT_LIBRARY: &[LibraryPrompt] = &[
    LibraryPrompt {
        kind: "affirmation",
        title: "Daily Affirmation",
        content: "You are capable of amazing things. Your potential is limitless, and every small step forward is progress worth celebrating.",
    },
    LibraryPrompt {
        kind: "gratitude",
        title: "Gratitude Reminder",
        content: "Take a moment to appreciate three things in your life right now. They can be as simple as a warm cup of coffee or a friend's smile.",
    },
    LibraryPrompt {
        kind: "motivation",
        title: "Motivation Boost",
        content: "Every expert was once a beginner. Don't give up on your journey.",
    },
    LibraryPrompt {
        kind: "mindfulness",
        title: "Mindfulness Moment",
        content: "Right now, take three deep breaths. Feel your feet on the ground. You are here, you are present, and that's enough.",
    },
    LibraryPrompt {
        kind: "self-care",
        title: "Self-Care Reminder",
        content: "It's okay to rest and it's okay to say no. You deserve kindness, especially from yourself.",
    },
    LibraryPrompt {
        kind: "growth",
        title: "Growth Mindset",
        content: "Challenges are stepping stones. Every difficulty you overcome makes you stronger and wiser.",
    },
    LibraryPrompt {
        kind: "confidence",
        title: "Confidence Builder",
        content: "You have survived 100% of your difficult days. You are more resilient than you know.",
    },
    LibraryPrompt {
        kind: "peace",
        title: "Inner Peace",
        content: "Peace begins with you. When you find calm within yourself, you bring it to everything you touch.",
    },
    LibraryPrompt {
        kind: "hope",
        title: "Hope & Optimism",
        content: "Tomorrow brings new possibilities. Today's struggles are temporary, but your strength is permanent.",
    },
    LibraryPrompt {
        kind: "achievement",
        title: "Celebrate Yourself",
        content: "Look how far you've come! Celebrate your progress, no matter how small.",
    },
    LibraryPrompt {
        kind: "student-focused",
        title: "Student Inspiration",
        content: "Your education is an investment in yourself. Every challenge faced is building your future.",
    },
    LibraryPrompt {
        kind: "stress-relief",
        title: "Stress Relief",
        content: "It's okay to feel overwhelmed sometimes. Take things one step at a time.",
    },
];

/// The library prompt for a given day, rotating through the catalog
pub fn prompt_of_the_day(date: NaiveDate) -> &'static LibraryPrompt {
    let index = date.num_days_from_ce().rem_euclid(PROMPT_LIBRARY.len() as i32) as usize;
    &PROMPT_LIBRARY[index]
}

/// Library prompts in a category (case-insensitive)
pub fn prompts_by_category(kind: &str) -> Vec<&'static LibraryPrompt> {
    PROMPT_LIBRARY
        .iter()
        .filter(|p| p.kind.eq_ignore_ascii_case(kind.trim()))
        .collect()
}
