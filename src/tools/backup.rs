/// Tools for exporting, importing and clearing all wellness data

use serde::{Deserialize, Serialize};
use schemars::JsonSchema;

use crate::domain::DomainError;
use crate::storage::{KeyValueStore, StorageError};
use crate::store::{UserDataExport, WellnessStore};
use super::NoParams;

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub data: UserDataExport,
    pub message: String,
}

/// Export every collection as one JSON document
pub fn export_data<S: KeyValueStore>(
    store: &WellnessStore<S>,
    _params: NoParams,
) -> Result<ExportResponse, StorageError> {
    let data = store.export_all();
    let json = serde_json::to_string_pretty(&data)?;

    Ok(ExportResponse {
        data,
        message: json,
    })
}

/// Parameters for importing a backup
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ImportParams {
    /// A document previously produced by data_export; only the collections
    /// present in it are replaced
    pub data: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
}

/// Replace collections from a backup document, all or nothing
pub fn import_data<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: ImportParams,
) -> Result<ImportResponse, StorageError> {
    let snapshot: UserDataExport = match serde_json::from_value(params.data) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!("Rejected malformed backup: {}", e);
            return Ok(ImportResponse {
                success: false,
                message: format!("Backup is not valid: {}", e),
            });
        }
    };

    let success = store.import_all(&snapshot);
    let message = if success {
        "Backup imported.".to_string()
    } else {
        "Backup could not be imported; nothing was changed.".to_string()
    };

    Ok(ImportResponse { success, message })
}

/// Parameters for clearing all data
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClearParams {
    /// Must be true; guards against accidental calls
    pub confirm: bool,
}

/// Delete every stored wellness record
pub fn clear_data<S: KeyValueStore>(
    store: &WellnessStore<S>,
    params: ClearParams,
) -> Result<ImportResponse, StorageError> {
    if !params.confirm {
        return Err(DomainError::Validation {
            message: "Set confirm to true to clear all data".to_string(),
        }
        .into());
    }

    store.clear_all()?;
    Ok(ImportResponse {
        success: true,
        message: "All wellness data cleared.".to_string(),
    })
}
