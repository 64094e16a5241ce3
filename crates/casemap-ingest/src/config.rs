//! JSON mapping configs and picklist files.

use std::path::Path;

use casemap_model::{MappingConfig, TargetValues};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{IngestError, Result};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    serde_json::from_str(&contents).map_err(|e| IngestError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| IngestError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Loads a reviewer-built mapping config.
pub fn load_mapping_config(path: &Path) -> Result<MappingConfig> {
    let config: MappingConfig = read_json(path)?;
    tracing::debug!(
        path = %path.display(),
        update_types = config.update_type_mappings.len(),
        event_types = config.event_type_mappings.len(),
        action = %config.unmapped_action,
        "loaded mapping config"
    );
    Ok(config)
}

pub fn save_mapping_config(path: &Path, config: &MappingConfig) -> Result<()> {
    write_json(path, config)
}

/// Loads the current picklist values per field.
pub fn load_target_values(path: &Path) -> Result<TargetValues> {
    read_json(path)
}
