//! CSV export of analysis results. Rows may carry heterogeneous column
//! sets; the header is the first-seen union of every key and missing cells
//! render as empty strings, so encoding never fails on mixed rows.

use chrono::Utc;
use thiserror::Error;

use crate::analytics::Group;
use crate::session::AnalysisRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV payload error: {0}")]
    Payload(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// One flat export row: ordered (column, value) pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRow {
    columns: Vec<(String, String)>,
}

impl ExportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.columns.push((key.into(), value.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A finished CSV payload plus the filename suggested to the caller
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Encode rows as a CSV byte payload.
///
/// The header is built from the keys of every row in first-seen order and
/// is stable for a given input sequence. Quoting of embedded delimiters,
/// quotes and newlines follows RFC 4180 via the `csv` writer.
pub fn to_csv(rows: &[ExportRow]) -> ExportResult<Vec<u8>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut header: Vec<String> = Vec::new();
    for row in rows {
        for (key, _) in row.columns() {
            if !header.iter().any(|h| h == key) {
                header.push(key.to_string());
            }
        }
    }

    if header.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header)?;

    for row in rows {
        let record: Vec<&str> = header
            .iter()
            .map(|key| row.get(key).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Payload(e.into_error()))
}

/// Encode rows and pair them with a suggested download filename
pub fn export_rows(rows: &[ExportRow], filename: impl Into<String>) -> ExportResult<CsvExport> {
    Ok(CsvExport {
        filename: filename.into(),
        bytes: to_csv(rows)?,
    })
}

/// Timestamped filename in the dashboard's download naming scheme
pub fn suggested_filename(prefix: &str) -> String {
    format!("{}_{}.csv", prefix, Utc::now().format("%Y%m%d_%H%M%S"))
}

/// Export row for a completed A/B-test analysis
pub fn ab_test_row(control: &Group, treatment: &Group, result: &str) -> ExportRow {
    ExportRow::new()
        .with("timestamp", Utc::now().to_rfc3339())
        .with("type", "A/B Test Analysis")
        .with("control_users", control.users)
        .with("control_conversions", control.conversions)
        .with("treatment_users", treatment.users)
        .with("treatment_conversions", treatment.conversions)
        .with("result", result)
}

/// Export row for one history entry
pub fn record_row(record: &AnalysisRecord) -> ExportRow {
    ExportRow::new()
        .with("timestamp", record.timestamp.to_rfc3339())
        .with("type", record.kind.label())
        .with("query", &record.query)
        .with("result", &record.result)
}
