//! Mapping configuration types for import type resolution.
//!
//! A reviewer builds a [`MappingConfig`] once per import session; it pairs
//! external labels from a third-party source with members of the destination
//! picklists held in [`TargetValues`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One explicit decision: an external label maps to a target picklist value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMapping {
    /// Raw label as it appears in the imported data.
    pub external_value: String,
    /// Destination picklist value.
    pub target_value: String,
    /// Target does not exist yet and must be created in the picklist.
    #[serde(default)]
    pub auto_create: bool,
}

impl TypeMapping {
    pub fn new(
        external_value: impl Into<String>,
        target_value: impl Into<String>,
        auto_create: bool,
    ) -> Self {
        Self {
            external_value: external_value.into(),
            target_value: target_value.into(),
            auto_create,
        }
    }

    /// Case-insensitive comparison against the external label.
    pub fn matches_external(&self, value: &str) -> bool {
        self.external_value.to_lowercase() == value.to_lowercase()
    }
}

/// Policy applied when no mapping, exact or fuzzy rule matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedAction {
    /// Leave the value empty.
    #[default]
    Skip,
    /// Keep the raw value and create it in the picklist.
    UseOriginal,
    /// Fall back to the field's default value.
    UseDefault,
}

impl UnmappedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::UseOriginal => "use_original",
            Self::UseDefault => "use_default",
        }
    }
}

impl fmt::Display for UnmappedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnmappedAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "skip" => Ok(Self::Skip),
            "use_original" => Ok(Self::UseOriginal),
            "use_default" => Ok(Self::UseDefault),
            _ => Err(ModelError::UnknownUnmappedAction(s.to_string())),
        }
    }
}

/// The picklist-backed fields an import maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappedField {
    UpdateType,
    EventType,
}

impl MappedField {
    pub const ALL: [MappedField; 2] = [MappedField::UpdateType, MappedField::EventType];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpdateType => "update_type",
            Self::EventType => "event_type",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpdateType => "Update Type",
            Self::EventType => "Event Type",
        }
    }
}

impl fmt::Display for MappedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MappedField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "update_type" => Ok(Self::UpdateType),
            "event_type" => Ok(Self::EventType),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

/// Complete mapping configuration for one import session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub update_type_mappings: Vec<TypeMapping>,
    #[serde(default)]
    pub event_type_mappings: Vec<TypeMapping>,
    #[serde(default)]
    pub unmapped_action: UnmappedAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_update_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_event_type: Option<String>,
}

impl MappingConfig {
    pub fn mappings_for(&self, field: MappedField) -> &[TypeMapping] {
        match field {
            MappedField::UpdateType => &self.update_type_mappings,
            MappedField::EventType => &self.event_type_mappings,
        }
    }

    pub fn mappings_for_mut(&mut self, field: MappedField) -> &mut Vec<TypeMapping> {
        match field {
            MappedField::UpdateType => &mut self.update_type_mappings,
            MappedField::EventType => &mut self.event_type_mappings,
        }
    }

    pub fn default_for(&self, field: MappedField) -> Option<&str> {
        match field {
            MappedField::UpdateType => self.default_update_type.as_deref(),
            MappedField::EventType => self.default_event_type.as_deref(),
        }
    }
}

/// Existing picklist values per mapped field, fetched by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetValues {
    #[serde(default)]
    pub update_types: Vec<String>,
    #[serde(default)]
    pub event_types: Vec<String>,
}

impl TargetValues {
    pub fn for_field(&self, field: MappedField) -> &[String] {
        match field {
            MappedField::UpdateType => &self.update_types,
            MappedField::EventType => &self.event_types,
        }
    }

    /// Case-insensitive membership check against a field's picklist.
    pub fn contains(&self, field: MappedField, value: &str) -> bool {
        contains_ignore_case(self.for_field(field), value)
    }
}

/// Returns true if `values` holds `value`, ignoring case.
pub fn contains_ignore_case<S: AsRef<str>>(values: &[S], value: &str) -> bool {
    let needle = value.to_lowercase();
    values.iter().any(|v| v.as_ref().to_lowercase() == needle)
}
