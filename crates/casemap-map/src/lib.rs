#![deny(unsafe_code)]

//! Type-mapping resolver for picklist imports.
//!
//! Maps labels from an external data source onto the destination system's
//! picklists. Everything here is pure: callers fetch picklists and persist
//! mapping decisions themselves.

pub mod fuzzy;
pub mod mapper;
pub mod resolve;
pub mod similarity;
pub mod suggest;
pub mod validate;

pub use fuzzy::{
    DEFAULT_MATCH_THRESHOLD, FuzzyMatch, RESOLVE_MATCH_THRESHOLD, SUGGEST_MATCH_THRESHOLD,
    find_best_match,
};
pub use mapper::{ResolutionReport, TypeMapper};
pub use resolve::resolve_type;
pub use similarity::{distance, similarity};
pub use suggest::{extract_unique_values, merge_suggestions, suggest_mappings};
pub use validate::validate_mappings;
