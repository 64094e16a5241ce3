//! Mapping suggestions for reviewer confirmation.

use std::collections::BTreeSet;

use casemap_model::{ImportRecord, TypeMapping};
use tracing::debug;

use crate::fuzzy::{SUGGEST_MATCH_THRESHOLD, find_best_match};

/// Proposes one [`TypeMapping`] per external value, in input order.
///
/// Values are not deduplicated here; feed the output of
/// [`extract_unique_values`]. Each value gets, in order of preference:
/// an exact case-insensitive picklist match, a fuzzy match at
/// [`SUGGEST_MATCH_THRESHOLD`], or a self-mapping flagged `auto_create`.
pub fn suggest_mappings<E, T>(external_values: &[E], target_values: &[T]) -> Vec<TypeMapping>
where
    E: AsRef<str>,
    T: AsRef<str>,
{
    let suggestions: Vec<TypeMapping> = external_values
        .iter()
        .map(AsRef::<str>::as_ref)
        .map(|external| {
            let lowered = external.to_lowercase();
            let exact = target_values
                .iter()
                .map(AsRef::<str>::as_ref)
                .find(|t| t.to_lowercase() == lowered);
            if let Some(target) = exact {
                return TypeMapping::new(external, target, false);
            }
            match find_best_match(external, target_values, SUGGEST_MATCH_THRESHOLD).matched {
                Some(target) => TypeMapping::new(external, target, false),
                None => TypeMapping::new(external, external, true),
            }
        })
        .collect();

    debug!(
        suggested = suggestions.len(),
        new_values = suggestions.iter().filter(|m| m.auto_create).count(),
        "built mapping suggestions"
    );
    suggestions
}

/// Adds `suggestions` to a reviewed mapping list without overriding it.
///
/// Existing entries are kept as they are. A suggestion is appended only when
/// no entry (existing or already appended) has the same external value,
/// compared case-insensitively.
pub fn merge_suggestions(
    existing: &[TypeMapping],
    suggestions: impl IntoIterator<Item = TypeMapping>,
) -> Vec<TypeMapping> {
    let mut known: BTreeSet<String> = existing
        .iter()
        .map(|m| m.external_value.trim().to_lowercase())
        .collect();
    let mut merged = existing.to_vec();
    for suggestion in suggestions {
        if known.insert(suggestion.external_value.trim().to_lowercase()) {
            merged.push(suggestion);
        }
    }
    debug!(
        kept = existing.len(),
        added = merged.len() - existing.len(),
        "merged mapping suggestions"
    );
    merged
}

/// Collects the distinct non-empty values of `field` across `records`.
///
/// Values are trimmed and deduplicated case-insensitively (the first
/// spelling seen wins), then sorted lexicographically.
pub fn extract_unique_values<'a, I>(records: I, field: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a ImportRecord>,
{
    let mut seen = BTreeSet::new();
    let mut values = Vec::new();
    for record in records {
        let Some(raw) = record.get(field) else {
            continue;
        };
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_lowercase()) {
            values.push(value.to_string());
        }
    }
    values.sort();
    values
}
