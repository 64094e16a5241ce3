//! Batch resolution for one import session.

use std::collections::{BTreeMap, BTreeSet};

use casemap_model::{
    ImportRecord, MappedField, MappingConfig, MappingResult, MatchType, TargetValues,
};
use tracing::{debug, debug_span};

use crate::resolve::resolve_type;

/// Binds a session's [`MappingConfig`] to the picklists it was built against.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    config: &'a MappingConfig,
    targets: &'a TargetValues,
}

impl<'a> TypeMapper<'a> {
    pub fn new(config: &'a MappingConfig, targets: &'a TargetValues) -> Self {
        Self { config, targets }
    }

    /// Resolves a single value of `field`.
    pub fn resolve(&self, field: MappedField, value: &str) -> MappingResult {
        resolve_type(
            value,
            self.config.mappings_for(field),
            self.targets.for_field(field),
            self.config.unmapped_action,
            self.config.default_for(field),
        )
    }

    /// Resolves `column` of every record as `field`, preserving row order.
    ///
    /// Records without the column resolve as empty input.
    pub fn resolve_records<'r, I>(
        &self,
        records: I,
        field: MappedField,
        column: &str,
    ) -> ResolutionReport
    where
        I: IntoIterator<Item = &'r ImportRecord>,
    {
        let span = debug_span!("resolve_records", field = field.as_str());
        let _guard = span.enter();

        let mut report = ResolutionReport::new(field);
        for record in records {
            let raw = record.get(column).map(String::as_str).unwrap_or_default();
            report.push(self.resolve(field, raw));
        }

        debug!(
            rows = report.results.len(),
            to_create = report.to_create.len(),
            "resolved column"
        );
        report
    }
}

/// Per-row results of a batch resolution plus the values it will create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionReport {
    pub field: MappedField,
    pub results: Vec<MappingResult>,
    pub counts: BTreeMap<MatchType, usize>,
    /// Distinct created values, first-seen order.
    pub to_create: Vec<String>,
    created_keys: BTreeSet<String>,
}

impl ResolutionReport {
    pub fn new(field: MappedField) -> Self {
        Self {
            field,
            results: Vec::new(),
            counts: BTreeMap::new(),
            to_create: Vec::new(),
            created_keys: BTreeSet::new(),
        }
    }

    pub fn push(&mut self, result: MappingResult) {
        *self.counts.entry(result.match_type).or_default() += 1;
        if result.was_created
            && !result.value.is_empty()
            && self.created_keys.insert(result.value.to_lowercase())
        {
            self.to_create.push(result.value.clone());
        }
        self.results.push(result);
    }

    pub fn count(&self, match_type: MatchType) -> usize {
        self.counts.get(&match_type).copied().unwrap_or_default()
    }

    /// Rows that ended with no value.
    pub fn empty_count(&self) -> usize {
        self.results.iter().filter(|r| r.value.is_empty()).count()
    }
}
