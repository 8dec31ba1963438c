/// User settings and partial updates
///
/// Settings are stored as a single record. Every field has a default, so a
/// stored record that is missing fields (older versions, hand-edited backups)
/// still yields a complete `UserSettings` when read.

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use chrono::NaiveTime;
use crate::domain::DomainError;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

pub const MAX_BREATHING_MINUTES: u32 = 60;

/// The complete settings record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub notifications: bool,
    /// Daily reminder time, `HH:MM`
    pub reminder_time: String,
    pub theme: Theme,
    /// 0.0 to 1.0
    pub music_volume: f64,
    /// Minutes
    pub breathing_duration: u32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            reminder_time: "20:00".to_string(),
            theme: Theme::Light,
            music_volume: 0.7,
            breathing_duration: 3,
        }
    }
}

/// A partial settings update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    /// Enable or disable daily reminders
    pub notifications: Option<bool>,
    /// Reminder time as HH:MM (24-hour)
    pub reminder_time: Option<String>,
    /// "light" or "dark"
    pub theme: Option<Theme>,
    /// Background music volume between 0.0 and 1.0
    pub music_volume: Option<f64>,
    /// Default breathing session length in minutes (1-60)
    pub breathing_duration: Option<u32>,
}

impl SettingsPatch {
    /// Check every present field
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(ref time) = self.reminder_time {
            check_reminder_time(time)?;
        }
        if let Some(volume) = self.music_volume {
            check_music_volume(volume)?;
        }
        if let Some(minutes) = self.breathing_duration {
            check_breathing_duration(minutes)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }
}

fn check_reminder_time(time: &str) -> Result<(), DomainError> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| {
        DomainError::InvalidSetting(format!("reminderTime must be HH:MM, got '{}'", time))
    })?;
    Ok(())
}

fn check_music_volume(volume: f64) -> Result<(), DomainError> {
    if !(0.0..=1.0).contains(&volume) {
        return Err(DomainError::InvalidSetting(format!(
            "musicVolume must be between 0.0 and 1.0, got {}",
            volume
        )));
    }
    Ok(())
}

fn check_breathing_duration(minutes: u32) -> Result<(), DomainError> {
    if minutes == 0 || minutes > MAX_BREATHING_MINUTES {
        return Err(DomainError::InvalidSetting(format!(
            "breathingDuration must be 1-{} minutes, got {}",
            MAX_BREATHING_MINUTES, minutes
        )));
    }
    Ok(())
}

impl UserSettings {
    /// Check a complete record, e.g. one arriving from a backup
    pub fn validate(&self) -> Result<(), DomainError> {
        check_reminder_time(&self.reminder_time)?;
        check_music_volume(self.music_volume)?;
        check_breathing_duration(self.breathing_duration)
    }

    /// Return a copy with the patch applied over this record
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        let mut next = self.clone();
        if let Some(notifications) = patch.notifications {
            next.notifications = notifications;
        }
        if let Some(ref time) = patch.reminder_time {
            next.reminder_time = time.trim().to_string();
        }
        if let Some(theme) = patch.theme {
            next.theme = theme;
        }
        if let Some(volume) = patch.music_volume {
            next.music_volume = volume;
        }
        if let Some(minutes) = patch.breathing_duration {
            next.breathing_duration = minutes;
        }
        next
    }
}
