//! Resolution and validation outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which resolution rule produced a [`MappingResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Explicit mapping table entry.
    Mapped,
    /// Case-insensitive equality with a picklist value.
    Exact,
    /// Similarity-threshold match against the picklist.
    Fuzzy,
    /// Empty input or the field default.
    Default,
    /// Raw value kept and queued for creation.
    Created,
    /// Unmapped value skipped.
    Original,
}

impl MatchType {
    pub const ALL: [MatchType; 6] = [
        MatchType::Mapped,
        MatchType::Exact,
        MatchType::Fuzzy,
        MatchType::Default,
        MatchType::Created,
        MatchType::Original,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mapped => "mapped",
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::Default => "default",
            Self::Created => "created",
            Self::Original => "original",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one external value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResult {
    /// Resolved target value (empty when skipped).
    pub value: String,
    /// The value is not yet in the picklist and must be created.
    pub was_created: bool,
    /// The external value as supplied.
    pub original_value: String,
    pub match_type: MatchType,
}

/// Aggregate validation report for a [`crate::MappingConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingValidationResult {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub mapped_count: usize,
    pub unmapped_count: usize,
    /// `"Field: value"` entries that will be added to picklists.
    pub will_create: Vec<String>,
}

impl MappingValidationResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
