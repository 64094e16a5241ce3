use std::collections::BTreeMap;

pub mod error;
pub mod mapping;
pub mod result;

pub use error::{ModelError, Result};
pub use mapping::{
    MappedField, MappingConfig, TargetValues, TypeMapping, UnmappedAction, contains_ignore_case,
};
pub use result::{MappingResult, MappingValidationResult, MatchType};

/// One row of an import batch, keyed by column header.
pub type ImportRecord = BTreeMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_action_parses_snake_and_kebab_case() {
        assert_eq!("skip".parse::<UnmappedAction>(), Ok(UnmappedAction::Skip));
        assert_eq!(
            "use-original".parse::<UnmappedAction>(),
            Ok(UnmappedAction::UseOriginal)
        );
        assert_eq!(
            " USE_DEFAULT ".parse::<UnmappedAction>(),
            Ok(UnmappedAction::UseDefault)
        );
        assert!(matches!(
            "drop".parse::<UnmappedAction>(),
            Err(ModelError::UnknownUnmappedAction(_))
        ));
    }

    #[test]
    fn mapped_field_labels() {
        assert_eq!(MappedField::UpdateType.to_string(), "Update Type");
        assert_eq!("event-type".parse::<MappedField>(), Ok(MappedField::EventType));
        assert!("status".parse::<MappedField>().is_err());
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{
            "update_type_mappings": [
                {"external_value": "Surv", "target_value": "Surveillance"}
            ],
            "default_event_type": "Other"
        }"#;
        let config: MappingConfig = serde_json::from_str(json).expect("parse config");
        assert_eq!(config.unmapped_action, UnmappedAction::Skip);
        assert_eq!(config.update_type_mappings.len(), 1);
        assert!(!config.update_type_mappings[0].auto_create);
        assert!(config.event_type_mappings.is_empty());
        assert_eq!(config.default_for(MappedField::EventType), Some("Other"));
        assert_eq!(config.default_for(MappedField::UpdateType), None);
    }

    #[test]
    fn config_serializes_action_in_snake_case() {
        let config = MappingConfig {
            unmapped_action: UnmappedAction::UseOriginal,
            ..MappingConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serialize config");
        assert!(json.contains(r#""unmapped_action":"use_original""#));
        assert!(!json.contains("default_update_type"));
    }

    #[test]
    fn target_values_contains_ignores_case() {
        let targets = TargetValues {
            update_types: vec!["Surveillance".to_string()],
            event_types: vec![],
        };
        assert!(targets.contains(MappedField::UpdateType, "SURVEILLANCE"));
        assert!(!targets.contains(MappedField::EventType, "Surveillance"));
    }

    #[test]
    fn type_mapping_matches_external_case_insensitively() {
        let mapping = TypeMapping::new("Phone Call", "Client Contact", false);
        assert!(mapping.matches_external("phone call"));
        assert!(!mapping.matches_external("phone"));
    }

    #[test]
    fn match_type_serializes_lowercase() {
        let result = MappingResult {
            value: "Interview".to_string(),
            was_created: false,
            original_value: "interview".to_string(),
            match_type: MatchType::Exact,
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        assert!(json.contains(r#""match_type":"exact""#));
    }
}
