use casemap_map::{
    DEFAULT_MATCH_THRESHOLD, extract_unique_values, find_best_match, resolve_type,
    suggest_mappings, validate_mappings,
};
use casemap_model::{
    ImportRecord, MappingConfig, MatchType, TargetValues, TypeMapping, UnmappedAction,
};

fn no_mappings() -> Vec<TypeMapping> {
    Vec::new()
}

#[test]
fn typo_matches_and_garbage_does_not() {
    let targets = ["Surveillance", "Interview"];
    assert_eq!(
        find_best_match("Surveilance", &targets, DEFAULT_MATCH_THRESHOLD).matched,
        Some("Surveillance")
    );
    assert_eq!(
        find_best_match("xyz123", &targets, DEFAULT_MATCH_THRESHOLD).matched,
        None
    );
}

#[test]
fn canonical_input_resolves_exactly() {
    let resolved = resolve_type(
        "Surveillance",
        &no_mappings(),
        &["Surveillance", "Interview"],
        UnmappedAction::Skip,
        None,
    );
    assert_eq!(resolved.value, "Surveillance");
    assert_eq!(resolved.match_type, MatchType::Exact);
    assert!(!resolved.was_created);
}

#[test]
fn empty_input_uses_default() {
    let resolved = resolve_type(
        "",
        &no_mappings(),
        &["Surveillance"],
        UnmappedAction::UseDefault,
        Some("Other"),
    );
    assert_eq!(resolved.value, "Other");
    assert_eq!(resolved.match_type, MatchType::Default);
    assert!(!resolved.was_created);
}

#[test]
fn fuzzy_match_wins_before_unmapped_action() {
    let resolved = resolve_type(
        "Survelance",
        &no_mappings(),
        &["Surveillance"],
        UnmappedAction::UseOriginal,
        None,
    );
    assert_eq!(resolved.value, "Surveillance");
    assert_eq!(resolved.match_type, MatchType::Fuzzy);
    assert!(!resolved.was_created);
}

#[test]
fn unknown_value_is_skipped() {
    let resolved = resolve_type(
        "CompletelyUnknownType",
        &no_mappings(),
        &["Surveillance"],
        UnmappedAction::Skip,
        None,
    );
    assert_eq!(resolved.value, "");
    assert_eq!(resolved.match_type, MatchType::Original);
    assert!(!resolved.was_created);
}

#[test]
fn explicit_mapping_overrides_exact_match() {
    let mappings = vec![TypeMapping::new("Interview", "Client Contact", false)];
    let resolved = resolve_type(
        "Interview",
        &mappings,
        &["Interview"],
        UnmappedAction::Skip,
        None,
    );
    assert_eq!(resolved.value, "Client Contact");
    assert_eq!(resolved.match_type, MatchType::Mapped);
    assert!(!resolved.was_created);
}

#[test]
fn validation_rejects_empty_target() {
    let config = MappingConfig {
        update_type_mappings: vec![TypeMapping::new("Surveillance", "", false)],
        ..MappingConfig::default()
    };
    let result = validate_mappings(&config, &TargetValues::default());
    assert!(!result.is_valid);
    assert!(!result.errors.is_empty());
}

#[test]
fn validation_reports_creations_without_failing() {
    let config = MappingConfig {
        update_type_mappings: vec![TypeMapping::new("Follow-Up", "Follow-Up", true)],
        ..MappingConfig::default()
    };
    let targets = TargetValues {
        update_types: vec!["Surveillance".to_string(), "Interview".to_string()],
        event_types: Vec::new(),
    };
    let result = validate_mappings(&config, &targets);
    assert!(result.is_valid);
    assert_eq!(result.will_create, vec!["Update Type: Follow-Up"]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.mapped_count, 1);
}

#[test]
fn import_batch_suggestions() {
    let records: Vec<ImportRecord> = ["Surveillance", "surveillance", "Follow-Up", ""]
        .into_iter()
        .map(|value| ImportRecord::from([("update_type".to_string(), value.to_string())]))
        .collect();
    let targets = ["Surveillance", "Interview"];

    let unique = extract_unique_values(&records, "update_type");
    assert_eq!(unique, vec!["Follow-Up", "Surveillance"]);

    let suggestions = suggest_mappings(&unique, &targets);
    assert_eq!(
        suggestions,
        vec![
            TypeMapping::new("Follow-Up", "Follow-Up", true),
            TypeMapping::new("Surveillance", "Surveillance", false),
        ]
    );
}

#[test]
fn suggestions_validate_cleanly() {
    let targets = TargetValues {
        update_types: vec!["Surveillance".to_string(), "Interview".to_string()],
        event_types: Vec::new(),
    };
    let config = MappingConfig {
        update_type_mappings: suggest_mappings(
            &["Surveilance", "Court Filing"],
            &targets.update_types,
        ),
        ..MappingConfig::default()
    };
    let result = validate_mappings(&config, &targets);
    assert!(result.is_valid);
    assert_eq!(result.mapped_count, 2);
    assert_eq!(result.will_create, vec!["Update Type: Court Filing"]);
}
