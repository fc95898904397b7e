//! Snapshot comparison
//!
//! Joins the suite trees of two snapshots by path and reports what moved:
//! overall pass/fail deltas, conformance delta, and the per-suite
//! improvements and regressions.

use colored::*;
use std::collections::BTreeMap;
use std::path::Path;

use test262_dash_report::{ReportError, SnapshotData, SuiteResult};

/// Per-suite movement between two snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteDelta {
    /// Slash-joined suite path, e.g. `language/expressions`
    pub path: String,
    pub passed_delta: i64,
    pub failed_delta: i64,
}

/// Comparison between two snapshots
#[derive(Debug)]
pub struct SnapshotComparison {
    pub base_commit: String,
    pub new_commit: String,
    /// Delta in total pass count
    pub passed_delta: i64,
    /// Delta in derived failed count
    pub failed_delta: i64,
    pub base_conformance: f64,
    pub new_conformance: f64,
    /// Suites whose pass count went up
    pub improved: Vec<SuiteDelta>,
    /// Suites whose fail count went up
    pub regressed: Vec<SuiteDelta>,
}

impl SnapshotComparison {
    /// Compare two snapshots, `base` first.
    pub fn compare(base: &SnapshotData, new: &SnapshotData) -> Self {
        let base_suites = flatten_suites(base);
        let new_suites = flatten_suites(new);

        let mut improved = Vec::new();
        let mut regressed = Vec::new();

        for (path, (new_passed, new_failed)) in &new_suites {
            let Some((base_passed, base_failed)) = base_suites.get(path) else {
                continue;
            };

            let passed_delta = *new_passed as i64 - *base_passed as i64;
            let failed_delta = new_failed - base_failed;
            let delta = SuiteDelta {
                path: path.clone(),
                passed_delta,
                failed_delta,
            };

            if passed_delta > 0 {
                improved.push(delta);
            } else if failed_delta > 0 {
                regressed.push(delta);
            }
        }

        SnapshotComparison {
            base_commit: base.commit.clone(),
            new_commit: new.commit.clone(),
            passed_delta: new.passed as i64 - base.passed as i64,
            failed_delta: new.failed() - base.failed(),
            base_conformance: base.conformance(),
            new_conformance: new.conformance(),
            improved,
            regressed,
        }
    }

    /// Print the comparison as a colored report
    pub fn print(&self) {
        println!("{}", "=== Test262 Snapshot Comparison ===".bold().cyan());
        println!("{} → {}", self.base_commit, self.new_commit);
        println!();

        let rate_delta = self.new_conformance - self.base_conformance;
        let rate_str = if rate_delta >= 0.0 {
            format!("+{:.2}%", rate_delta).green()
        } else {
            format!("{:.2}%", rate_delta).red()
        };
        println!(
            "Conformance: {:.2}% → {:.2}% ({})",
            self.base_conformance, self.new_conformance, rate_str
        );

        let pass_str = if self.passed_delta >= 0 {
            format!("+{}", self.passed_delta).green()
        } else {
            format!("{}", self.passed_delta).red()
        };
        println!("Pass delta: {}", pass_str);

        if !self.improved.is_empty() {
            println!();
            println!("{} ({}):", "Improved suites".green().bold(), self.improved.len());
            for delta in self.improved.iter().take(20) {
                println!("  {} {} (+{})", "+".green(), delta.path, delta.passed_delta);
            }
            if self.improved.len() > 20 {
                println!("  ... and {} more", self.improved.len() - 20);
            }
        }

        if !self.regressed.is_empty() {
            println!();
            println!("{} ({}):", "Regressed suites".red().bold(), self.regressed.len());
            for delta in self.regressed.iter().take(20) {
                println!("  {} {} (+{} failing)", "-".red(), delta.path, delta.failed_delta);
            }
            if self.regressed.len() > 20 {
                println!("  ... and {} more", self.regressed.len() - 20);
            }
        }

        if self.improved.is_empty() && self.regressed.is_empty() {
            println!();
            println!("{}", "No suite-level changes detected.".dimmed());
        }
    }
}

/// Run comparison from two snapshot file paths
pub fn compare_files(base_path: &Path, new_path: &Path) -> Result<SnapshotComparison, ReportError> {
    let base = SnapshotData::load(base_path)?;
    let new = SnapshotData::load(new_path)?;
    Ok(SnapshotComparison::compare(&base, &new))
}

/// Flatten a snapshot's suite tree into `path -> (passed, failed)`,
/// depth-first.
fn flatten_suites(snapshot: &SnapshotData) -> BTreeMap<String, (u64, i64)> {
    let mut map = BTreeMap::new();
    for suite in snapshot.suites() {
        flatten_into(&mut map, suite, "");
    }
    map
}

fn flatten_into(map: &mut BTreeMap<String, (u64, i64)>, suite: &SuiteResult, prefix: &str) {
    let path = if prefix.is_empty() {
        suite.name.clone()
    } else {
        format!("{}/{}", prefix, suite.name)
    };

    map.insert(path.clone(), (suite.passed, suite.failed()));

    for child in &suite.suites {
        flatten_into(map, child, &path);
    }
}
