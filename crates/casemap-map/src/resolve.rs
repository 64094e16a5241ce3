//! Resolution of one external value to a target picklist value.
//!
//! Rules are tried in a fixed order and the first one that applies wins:
//!
//! 1. empty input resolves to the field default
//! 2. explicit mapping table (overrides everything below)
//! 3. case-insensitive exact match against the picklist
//! 4. fuzzy match against the picklist at [`RESOLVE_MATCH_THRESHOLD`]
//! 5. the configured [`UnmappedAction`]

use casemap_model::{MappingResult, MatchType, TypeMapping, UnmappedAction, contains_ignore_case};
use tracing::trace;

use crate::fuzzy::{RESOLVE_MATCH_THRESHOLD, find_best_match};

/// Resolves `external_value` against explicit `mappings` and the existing
/// `target_values`.
///
/// Never fails; unmatched input ends in the `unmapped_action` fallback.
pub fn resolve_type<S: AsRef<str>>(
    external_value: &str,
    mappings: &[TypeMapping],
    target_values: &[S],
    unmapped_action: UnmappedAction,
    default_value: Option<&str>,
) -> MappingResult {
    let trimmed = external_value.trim();
    let result = |value: &str, was_created: bool, match_type: MatchType| MappingResult {
        value: value.to_string(),
        was_created,
        original_value: external_value.to_string(),
        match_type,
    };

    if trimmed.is_empty() {
        return result(default_value.unwrap_or_default(), false, MatchType::Default);
    }

    if let Some(mapping) = mappings.iter().find(|m| m.matches_external(trimmed)) {
        // A target outside the picklist without auto_create is passed through
        // unchanged and not flagged for creation.
        let was_created =
            mapping.auto_create && !contains_ignore_case(target_values, &mapping.target_value);
        trace!(was_created, "explicit mapping");
        return result(&mapping.target_value, was_created, MatchType::Mapped);
    }

    let lowered = trimmed.to_lowercase();
    if let Some(exact) = target_values
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|t| t.to_lowercase() == lowered)
    {
        return result(exact, false, MatchType::Exact);
    }

    let fuzzy = find_best_match(trimmed, target_values, RESOLVE_MATCH_THRESHOLD);
    if let Some(matched) = fuzzy.matched {
        trace!(similarity = fuzzy.similarity, "fuzzy match");
        return result(matched, false, MatchType::Fuzzy);
    }

    match unmapped_action {
        UnmappedAction::UseDefault => match default_value.filter(|d| !d.is_empty()) {
            Some(default) => result(default, false, MatchType::Default),
            None => result(trimmed, true, MatchType::Created),
        },
        UnmappedAction::UseOriginal => result(trimmed, true, MatchType::Created),
        UnmappedAction::Skip => result("", false, MatchType::Original),
    }
}
