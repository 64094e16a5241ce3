//! File handling for import type mapping.
//!
//! - **CSV batches**: read import rows, write them back with resolved values
//! - **Mapping configs**: JSON-serialized [`casemap_model::MappingConfig`]
//! - **Picklists**: JSON-serialized [`casemap_model::TargetValues`]

mod batch;
mod config;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV ===
pub use batch::{ImportBatch, read_import_csv, write_import_csv};

// === JSON ===
pub use config::{load_mapping_config, load_target_values, save_mapping_config};
