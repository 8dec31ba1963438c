/// Tools for reading and updating user settings

use serde::Serialize;

use crate::domain::{SettingsPatch, UserSettings};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::WellnessStore;
use super::NoParams;

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: UserSettings,
    pub message: String,
}

fn describe(settings: &UserSettings) -> String {
    format!(
        "Notifications: {}\nReminder time: {}\nTheme: {:?}\nMusic volume: {:.0}%\nBreathing duration: {} min",
        if settings.notifications { "on" } else { "off" },
        settings.reminder_time,
        settings.theme,
        settings.music_volume * 100.0,
        settings.breathing_duration
    )
}

pub fn get_settings<S: KeyValueStore>(
    store: &WellnessStore<S>,
    _params: NoParams,
) -> Result<SettingsResponse, StorageError> {
    let settings = store.get_settings();
    Ok(SettingsResponse {
        message: describe(&settings),
        settings,
    })
}

/// Apply a partial settings update
pub fn update_settings<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: SettingsPatch,
) -> Result<SettingsResponse, StorageError> {
    if params.is_empty() {
        let settings = store.get_settings();
        return Ok(SettingsResponse {
            message: format!("No changes requested.\n{}", describe(&settings)),
            settings,
        });
    }

    let settings = store.update_settings(&params)?;
    tracing::info!("Settings updated");

    Ok(SettingsResponse {
        message: format!("Settings updated.\n{}", describe(&settings)),
        settings,
    })
}
