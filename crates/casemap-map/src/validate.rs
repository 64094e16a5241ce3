//! Validation of a completed mapping configuration.

use std::collections::BTreeSet;

use casemap_model::{MappedField, MappingConfig, MappingValidationResult, TargetValues};
use tracing::debug;

/// Checks every field's mapping list against the current picklists.
///
/// Errors block an import: a mapping without a target value, or two
/// mappings for the same external value. Mappings that will add a new
/// picklist value are reported in `will_create` and summarized in a single
/// warning; they are not errors.
pub fn validate_mappings(
    config: &MappingConfig,
    targets: &TargetValues,
) -> MappingValidationResult {
    let mut result = MappingValidationResult::default();

    for field in MappedField::ALL {
        let mut seen = BTreeSet::new();
        for mapping in config.mappings_for(field) {
            if !seen.insert(mapping.external_value.trim().to_lowercase()) {
                result.errors.push(format!(
                    "{field}: duplicate mapping for '{}'",
                    mapping.external_value
                ));
            }

            if mapping.target_value.trim().is_empty() {
                result.errors.push(format!(
                    "{field}: '{}' has no target value",
                    mapping.external_value
                ));
                result.unmapped_count += 1;
                continue;
            }

            result.mapped_count += 1;
            if mapping.auto_create && !targets.contains(field, &mapping.target_value) {
                result
                    .will_create
                    .push(format!("{field}: {}", mapping.target_value));
            }
        }
    }

    if !result.will_create.is_empty() {
        result.warnings.push(format!(
            "{} new value(s) will be created: {}",
            result.will_create.len(),
            result.will_create.join(", ")
        ));
    }

    result.is_valid = result.errors.is_empty();
    debug!(
        valid = result.is_valid,
        mapped = result.mapped_count,
        unmapped = result.unmapped_count,
        errors = result.errors.len(),
        "validated mapping config"
    );
    result
}
