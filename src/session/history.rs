use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of analysis that produced a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisKind {
    #[serde(rename = "A/B Test")]
    AbTest,
    #[serde(rename = "Market Research")]
    MarketResearch,
}

impl AnalysisKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AbTest => "A/B Test",
            Self::MarketResearch => "Market Research",
        }
    }
}

/// One completed analysis, immutable once appended to history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub timestamp: DateTime<Utc>,
    pub kind: AnalysisKind,
    pub query: String,
    pub result: String,
}

impl AnalysisRecord {
    pub fn new(kind: AnalysisKind, query: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            query: query.into(),
            result: result.into(),
        }
    }
}

/// Append-only, session-scoped log of past analyses.
///
/// In-memory only and intentionally not thread-safe: each logical session
/// owns exactly one store. History is lost when the session ends.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<AnalysisRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: AnalysisRecord) {
        self.records.push(record);
    }

    /// All records, oldest first. A newest-first view is the caller's job.
    pub fn all(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut store = HistoryStore::new();
        store.append(AnalysisRecord::new(AnalysisKind::AbTest, "q1", "r1"));
        store.append(AnalysisRecord::new(AnalysisKind::MarketResearch, "q2", "r2"));

        let records = store.all();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].query, "q1");
        assert_eq!(records[1].query, "q2");
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = HistoryStore::new();
        store.append(AnalysisRecord::new(AnalysisKind::AbTest, "q", "r"));
        assert!(!store.is_empty());

        store.clear();
        assert!(store.all().is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(AnalysisKind::AbTest.label(), "A/B Test");
        assert_eq!(AnalysisKind::MarketResearch.label(), "Market Research");
    }

    #[test]
    fn test_record_serializes_kind_label() {
        let record = AnalysisRecord::new(AnalysisKind::MarketResearch, "q", "r");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "Market Research");
    }
}
