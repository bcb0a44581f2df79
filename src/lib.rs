//! abpilot — conversational A/B-test analytics.
//!
//! Computes conversion rates and chart specs locally, delegates all
//! statistical analysis to a remote OpenAI-compatible endpoint, and keeps a
//! session-scoped history exportable as CSV.

pub mod analytics;
pub mod cli;
pub mod export;
pub mod llm;
pub mod report;
pub mod session;

pub use analytics::{ab_test_chart, conversion_rate, ChartSpec, Group};
pub use export::{export_rows, to_csv, CsvExport, ExportRow};
pub use llm::{resolve_credential, AnalysisClient, ClientConfig, ClientError};
pub use session::{AbTestOutcome, AnalysisKind, AnalysisRecord, HistoryStore, Session};
