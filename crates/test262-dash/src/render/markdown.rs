//! Markdown conformance document
//!
//! Same data as the HTML page, emitted as a committable
//! `CONFORMANCE.md`-style document.

use std::fmt::Write;

use test262_dash_report::{SnapshotData, SuiteResult};

use crate::render::format_percent;

/// Render a snapshot as a Markdown conformance document.
pub fn render_markdown(repo: &str, snapshot: &SnapshotData) -> String {
    let today = chrono::Utc::now().format("%Y-%m-%d");

    let mut out = String::new();
    writeln!(out, "# Test262 Conformance Status").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Last updated: {} (commit: {})", today, snapshot.commit).unwrap();
    writeln!(
        out,
        "Overall: {}/{} tests passing ({})",
        snapshot.passed,
        snapshot.total,
        format_percent(snapshot.conformance()),
    )
    .unwrap();
    writeln!(
        out,
        "Commit: https://github.com/{}/commit/{}",
        repo, snapshot.commit
    )
    .unwrap();
    writeln!(out).unwrap();

    if !snapshot.suites().is_empty() {
        writeln!(out, "## Suites").unwrap();
        writeln!(out).unwrap();
        writeln!(
            out,
            "| Suite | Total | Passed | Ignored | Failed | Conformance |"
        )
        .unwrap();
        writeln!(
            out,
            "|-------|------:|-------:|--------:|-------:|------------:|"
        )
        .unwrap();

        for suite in snapshot.suites() {
            write_suite_rows(&mut out, suite, 0);
        }
        writeln!(out).unwrap();
    }

    out
}

fn write_suite_rows(out: &mut String, suite: &SuiteResult, depth: usize) {
    // Nesting shown by indenting the suite name inside its cell.
    let indent = "&nbsp;&nbsp;".repeat(depth);
    writeln!(
        out,
        "| {}{} | {} | {} | {} | {} | {} |",
        indent,
        suite.name,
        suite.total,
        suite.passed,
        suite.ignored,
        suite.failed(),
        format_percent(suite.conformance()),
    )
    .unwrap();

    for child in &suite.suites {
        write_suite_rows(out, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_overall_line_and_suite_table() {
        let snapshot = SnapshotData::from_json(
            r#"{
                "commit": "deadbeef",
                "total": 200, "passed": 150, "ignored": 10,
                "results": {"suites": [
                    {"name": "language", "passed": 80, "ignored": 5, "total": 100,
                     "suites": [{"name": "expressions", "passed": 40, "ignored": 2, "total": 50}]}
                ]}
            }"#,
        )
        .unwrap();

        let md = render_markdown("boa-dev/boa", &snapshot);

        assert!(md.contains("# Test262 Conformance Status"));
        assert!(md.contains("Overall: 150/200 tests passing (75.00%)"));
        assert!(md.contains("https://github.com/boa-dev/boa/commit/deadbeef"));
        assert!(md.contains("| language | 100 | 80 | 5 | 15 | 80.00% |"));
        // Nested suite is indented inside its name cell.
        assert!(md.contains("| &nbsp;&nbsp;expressions | 50 | 40 | 2 | 8 | 80.00% |"));
    }

    #[test]
    fn counters_only_snapshot_omits_suite_table() {
        let snapshot = SnapshotData::from_json(
            r#"{"commit": "c", "total": 10, "passed": 9, "ignored": 0}"#,
        )
        .unwrap();

        let md = render_markdown("boa-dev/boa", &snapshot);
        assert!(md.contains("Overall: 9/10 tests passing (90.00%)"));
        assert!(!md.contains("## Suites"));
    }
}
