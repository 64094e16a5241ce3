//! CSV import batches.

use std::io::Write;
use std::path::{Path, PathBuf};

use casemap_model::ImportRecord;
use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{IngestError, Result};

/// Rows of one import file together with their header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub records: Vec<ImportRecord>,
}

impl ImportBatch {
    /// Fails with [`IngestError::MissingColumn`] unless `column` is a header.
    pub fn require_column(&self, column: &str) -> Result<()> {
        if self.headers.iter().any(|h| h == column) {
            Ok(())
        } else {
            Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: self.path.clone(),
            })
        }
    }

    /// Writes headers and records as CSV, keeping the original column order.
    pub fn write_to<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers)?;
        for record in &self.records {
            writer.write_record(
                self.headers
                    .iter()
                    .map(|h| record.get(h).map(String::as_str).unwrap_or_default()),
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Reads a CSV file with a header row into an [`ImportBatch`].
///
/// Strips a UTF-8 BOM from header names and trims whitespace from values.
pub fn read_import_csv(path: &Path) -> Result<ImportBatch> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;
    let csv_error = |e: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let mut record = ImportRecord::new();
        for (idx, value) in row.iter().enumerate() {
            let Some(key) = headers.get(idx) else {
                continue;
            };
            record.insert(key.clone(), value.trim().to_string());
        }
        records.push(record);
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = records.len(),
        "read import csv"
    );
    Ok(ImportBatch {
        path: path.to_path_buf(),
        headers,
        records,
    })
}

/// Writes `batch` to `path`, replacing any existing file.
pub fn write_import_csv(path: &Path, batch: &ImportBatch) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    batch.write_to(file).map_err(|e| IngestError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
