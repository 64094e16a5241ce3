//! Suggest and resolve orchestration behind the CLI commands.
//!
//! Functions here work on loaded data and return what the commands print or
//! write; file loading and console output stay in the binary.

use anyhow::Result;
use tracing::debug;

use casemap_ingest::ImportBatch;
use casemap_map::{
    ResolutionReport, TypeMapper, extract_unique_values, merge_suggestions, suggest_mappings,
    validate_mappings,
};
use casemap_model::{
    MappedField, MappingConfig, MappingValidationResult, TargetValues, TypeMapping, UnmappedAction,
};

use crate::logging::redact_value;

/// Suggestions for one column and the config they were merged into.
#[derive(Debug, Clone)]
pub struct SuggestOutcome {
    pub field: MappedField,
    pub distinct: usize,
    pub suggestions: Vec<TypeMapping>,
    /// `base` config with suggestions added for unmapped external values.
    pub config: MappingConfig,
}

/// Suggests mappings for the distinct values of `column`.
///
/// Entries already in `base` for `field` are kept; suggestions only fill in
/// external values that have no mapping yet.
pub fn suggest(
    batch: &ImportBatch,
    column: &str,
    field: MappedField,
    targets: &TargetValues,
    mut base: MappingConfig,
) -> Result<SuggestOutcome> {
    batch.require_column(column)?;

    let unique = extract_unique_values(&batch.records, column);
    let suggestions = suggest_mappings(&unique, targets.for_field(field));
    let merged = merge_suggestions(base.mappings_for(field), suggestions.iter().cloned());
    *base.mappings_for_mut(field) = merged;

    Ok(SuggestOutcome {
        field,
        distinct: unique.len(),
        suggestions,
        config: base,
    })
}

/// Validation result and per-column reports of a resolve run.
#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub validation: MappingValidationResult,
    /// Empty when the import was blocked.
    pub reports: Vec<ResolutionReport>,
}

impl ResolveOutcome {
    /// Validation errors stopped the import before any row was resolved.
    pub fn is_blocked(&self) -> bool {
        !self.validation.is_valid
    }
}

/// Validates `config`, then resolves each `(field, column)` pair and writes
/// the resolved values back into that column of `batch`.
///
/// `unmapped_action` overrides the config's policy. A config with
/// validation errors leaves `batch` untouched.
pub fn resolve(
    batch: &mut ImportBatch,
    config: &MappingConfig,
    targets: &TargetValues,
    columns: &[(MappedField, &str)],
    unmapped_action: Option<UnmappedAction>,
) -> Result<ResolveOutcome> {
    let mut config = config.clone();
    if let Some(action) = unmapped_action {
        config.unmapped_action = action;
    }

    let validation = validate_mappings(&config, targets);
    if !validation.is_valid {
        return Ok(ResolveOutcome {
            validation,
            reports: Vec::new(),
        });
    }

    for (_, column) in columns {
        batch.require_column(column)?;
    }

    let mapper = TypeMapper::new(&config, targets);
    let mut reports = Vec::with_capacity(columns.len());
    for &(field, column) in columns {
        let report = mapper.resolve_records(&batch.records, field, column);
        for value in &report.to_create {
            debug!(
                field = field.as_str(),
                value = redact_value(value),
                "value to create"
            );
        }
        for (record, result) in batch.records.iter_mut().zip(&report.results) {
            record.insert(column.to_string(), result.value.clone());
        }
        reports.push(report);
    }

    Ok(ResolveOutcome {
        validation,
        reports,
    })
}
