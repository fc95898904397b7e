//! Snapshot payloads written by the test262 harness

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::stats;

/// One complete conformance snapshot (`latest.json`, or one entry of the
/// historical series in `results.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotData {
    /// Commit SHA the suite ran against
    #[serde(default)]
    pub commit: String,
    /// Total number of tests
    #[serde(default)]
    pub total: u64,
    /// Number of passed tests
    #[serde(default)]
    pub passed: u64,
    /// Number of ignored tests
    #[serde(default)]
    pub ignored: u64,
    /// Per-suite breakdown, present only in full snapshots
    #[serde(default)]
    pub results: Option<SuiteTree>,
}

/// Wrapper around the top-level suite list of a full snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuiteTree {
    #[serde(default)]
    pub suites: Vec<SuiteResult>,
}

/// One suite of the recursive result tree.
///
/// A suite may contain nested sub-suites; leaf suites additionally carry a
/// per-test map in the raw JSON, which this model does not read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub name: String,
    #[serde(default)]
    pub passed: u64,
    #[serde(default)]
    pub ignored: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub suites: Vec<SuiteResult>,
}

/// Ordered series of snapshots (`results.json`), oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsHistory {
    pub snapshots: Vec<SnapshotData>,
}

/// Errors loading or parsing report files
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to read '{0}': {1}")]
    Io(String, #[source] std::io::Error),

    #[error("invalid report JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SnapshotData {
    /// Conformance percentage, `round(10000 * passed / total) / 100`.
    ///
    /// An empty snapshot (`total == 0`) yields `NaN`, matching the
    /// published dashboard arithmetic.
    pub fn conformance(&self) -> f64 {
        stats::conformance(self.passed, self.total)
    }

    /// Derived failed count, `total - passed - ignored`.
    ///
    /// Signed because the counters are taken from the snapshot as-is and
    /// never validated against each other.
    pub fn failed(&self) -> i64 {
        stats::failed_count(self.total, self.passed, self.ignored)
    }

    /// Top-level suites of the snapshot, empty when the snapshot carries
    /// only aggregate counters.
    pub fn suites(&self) -> &[SuiteResult] {
        self.results.as_ref().map(|t| t.suites.as_slice()).unwrap_or(&[])
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReportError::Io(path.display().to_string(), e))?;
        Self::from_json(&content)
    }
}

impl SuiteResult {
    /// Derived failed count for this suite, signed like [`SnapshotData::failed`].
    pub fn failed(&self) -> i64 {
        stats::failed_count(self.total, self.passed, self.ignored)
    }

    pub fn conformance(&self) -> f64 {
        stats::conformance(self.passed, self.total)
    }
}

impl ResultsHistory {
    /// The most recent snapshot of the series.
    pub fn latest(&self) -> Option<&SnapshotData> {
        self.snapshots.last()
    }

    /// The snapshot preceding the most recent one.
    pub fn previous(&self) -> Option<&SnapshotData> {
        self.snapshots.len().checked_sub(2).and_then(|i| self.snapshots.get(i))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReportError::Io(path.display().to_string(), e))?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_snapshot() {
        let json = r#"{
            "commit": "abc1234",
            "total": 200,
            "passed": 150,
            "ignored": 10,
            "results": {
                "suites": [
                    {"name": "language", "passed": 80, "ignored": 5, "total": 100, "suites": []},
                    {"name": "built-ins", "passed": 70, "ignored": 5, "total": 100,
                     "suites": [{"name": "Array", "passed": 30, "ignored": 1, "total": 40}]}
                ]
            }
        }"#;

        let snap = SnapshotData::from_json(json).unwrap();
        assert_eq!(snap.commit, "abc1234");
        assert_eq!(snap.failed(), 40);
        assert_eq!(snap.suites().len(), 2);
        assert_eq!(snap.suites()[1].suites[0].name, "Array");
        assert_eq!(snap.suites()[1].suites[0].failed(), 9);
    }

    #[test]
    fn tolerates_unknown_fields_and_missing_counters() {
        // Leaf suites carry a per-test "results" map the model ignores.
        let json = r#"{"results":{"suites":[
            {"name":"A","passed":2,"ignored":0,"total":3,"results":{}}
        ]}}"#;

        let snap = SnapshotData::from_json(json).unwrap();
        assert_eq!(snap.commit, "");
        assert_eq!(snap.total, 0);
        let suite = &snap.suites()[0];
        assert_eq!(suite.name, "A");
        assert_eq!(suite.failed(), 1);
    }

    #[test]
    fn history_reads_last_and_previous() {
        let json = r#"[
            {"commit": "one", "total": 10, "passed": 5, "ignored": 1},
            {"commit": "two", "total": 10, "passed": 6, "ignored": 1},
            {"commit": "three", "total": 10, "passed": 7, "ignored": 1}
        ]"#;

        let history = ResultsHistory::from_json(json).unwrap();
        assert_eq!(history.latest().unwrap().commit, "three");
        assert_eq!(history.previous().unwrap().commit, "two");

        let empty = ResultsHistory::default();
        assert!(empty.latest().is_none());
        assert!(empty.previous().is_none());

        let single = ResultsHistory::from_json(r#"[{"commit": "only"}]"#).unwrap();
        assert_eq!(single.latest().unwrap().commit, "only");
        assert!(single.previous().is_none());
    }

    #[test]
    fn malformed_counters_yield_negative_failed() {
        // Counters are never validated; a snapshot claiming more passes
        // than tests reports a negative failed count instead of aborting.
        let snap = SnapshotData::from_json(r#"{"total": 5, "passed": 9, "ignored": 0}"#).unwrap();
        assert_eq!(snap.failed(), -4);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(SnapshotData::from_json("not json").is_err());
        assert!(ResultsHistory::from_json("{\"not\": \"a list\"}").is_err());
    }
}
