use std::fs;

use casemap_ingest::{
    IngestError, load_mapping_config, load_target_values, read_import_csv, save_mapping_config,
    write_import_csv,
};
use casemap_model::{MappingConfig, TypeMapping, UnmappedAction};

#[test]
fn reads_csv_with_bom_and_trims_values() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("updates.csv");
    fs::write(
        &path,
        "\u{feff}Case,Update Type\nC-1, Surveillance \nC-2,\"Follow-Up\"\n",
    )
    .expect("write csv");

    let batch = read_import_csv(&path).expect("read csv");
    assert_eq!(batch.headers, vec!["Case", "Update Type"]);
    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.records[0]["Update Type"], "Surveillance");
    assert_eq!(batch.records[1]["Case"], "C-2");
    assert!(batch.require_column("Update Type").is_ok());
    assert!(matches!(
        batch.require_column("Event Type"),
        Err(IngestError::MissingColumn { .. })
    ));
}

#[test]
fn short_rows_leave_columns_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("short.csv");
    fs::write(&path, "Case,Update Type\nC-1\n").expect("write csv");

    let batch = read_import_csv(&path).expect("read csv");
    assert_eq!(batch.records[0].get("Update Type"), None);
}

#[test]
fn missing_csv_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_import_csv(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn written_csv_keeps_header_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "Zeta,Alpha\nz1,a1\n").expect("write csv");

    let mut batch = read_import_csv(&input).expect("read csv");
    batch.records[0].insert("Alpha".to_string(), "a, quoted".to_string());
    write_import_csv(&output, &batch).expect("write output");

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written, "Zeta,Alpha\nz1,\"a, quoted\"\n");
}

#[test]
fn mapping_config_persists_as_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mapping.json");
    let config = MappingConfig {
        update_type_mappings: vec![TypeMapping::new("Surv", "Surveillance", false)],
        unmapped_action: UnmappedAction::UseDefault,
        default_update_type: Some("Other".to_string()),
        ..MappingConfig::default()
    };

    save_mapping_config(&path, &config).expect("save config");
    let loaded = load_mapping_config(&path).expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn malformed_picklist_is_json_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("picklists.json");
    fs::write(&path, "{\"update_types\": [1, 2]}").expect("write json");

    let err = load_target_values(&path).unwrap_err();
    assert!(matches!(err, IngestError::Json { .. }));
}

#[test]
fn picklist_fields_default_to_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("picklists.json");
    fs::write(&path, "{\"event_types\": [\"Meeting\"]}").expect("write json");

    let targets = load_target_values(&path).expect("load picklists");
    assert!(targets.update_types.is_empty());
    assert_eq!(targets.event_types, vec!["Meeting"]);
}
