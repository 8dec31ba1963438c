/// Tools for the uplift prompt library and saved prompts

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use chrono::{NaiveDate, Utc, Datelike};

use crate::domain::{
    local_today, prompt_of_the_day, prompts_by_category, DomainError, LibraryPrompt,
    NewUpliftPrompt, UpliftPrompt,
};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::WellnessStore;
use super::NoParams;

/// Parameters for fetching today's prompt
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct PromptTodayParams {
    /// Restrict to one category, e.g. "gratitude" or "mindfulness"
    pub category: Option<String>,
    /// Day to pick for, YYYY-MM-DD (defaults to today)
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct PromptTodayResponse {
    pub prompt: LibraryPrompt,
    pub already_saved: bool,
    pub message: String,
}

/// Pick the library prompt for a day
pub fn prompt_today<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: PromptTodayParams,
) -> Result<PromptTodayResponse, StorageError> {
    let date = params.date.unwrap_or_else(local_today);

    let prompt = match params.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => {
            let matching = prompts_by_category(category);
            if matching.is_empty() {
                return Err(DomainError::Validation {
                    message: format!("Unknown prompt category '{}'", category),
                }
                .into());
            }
            let index = date.num_days_from_ce().rem_euclid(matching.len() as i32) as usize;
            *matching[index]
        }
        None => *prompt_of_the_day(date),
    };

    let already_saved = store
        .list_saved_prompts()
        .iter()
        .any(|p| p.title == prompt.title && p.content == prompt.content);

    Ok(PromptTodayResponse {
        message: format!("{} ({}): {}", prompt.title, prompt.kind, prompt.content),
        prompt,
        already_saved,
    })
}

/// Parameters for saving a prompt
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SavePromptParams {
    /// Category label, e.g. "affirmation"
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SavePromptResponse {
    pub success: bool,
    pub message: String,
    pub prompt: UpliftPrompt,
}

/// Save a prompt to the user's collection
pub fn save_prompt<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: SavePromptParams,
) -> Result<SavePromptResponse, StorageError> {
    let title = params.title.trim();
    let content = params.content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(DomainError::Validation {
            message: "Prompt title and content cannot be empty".to_string(),
        }
        .into());
    }

    let prompt = store.save_uplift_prompt(NewUpliftPrompt {
        kind: params.kind.trim().to_string(),
        title: title.to_string(),
        content: content.to_string(),
        saved_at: Utc::now(),
    })?;

    Ok(SavePromptResponse {
        success: true,
        message: format!("Saved '{}' to your prompts.", prompt.title),
        prompt,
    })
}

#[derive(Debug, Serialize)]
pub struct ListPromptsResponse {
    pub prompts: Vec<UpliftPrompt>,
    pub message: String,
}

/// List saved prompts, newest first
pub fn list_prompts<S: KeyValueStore>(
    store: &WellnessStore<S>,
    _params: NoParams,
) -> Result<ListPromptsResponse, StorageError> {
    let mut prompts = store.list_saved_prompts();
    prompts.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

    let message = if prompts.is_empty() {
        "No saved prompts yet.".to_string()
    } else {
        prompts
            .iter()
            .map(|p| format!("{} ({}): {}", p.title, p.kind, p.content))
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(ListPromptsResponse { prompts, message })
}
