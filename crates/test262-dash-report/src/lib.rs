//! # Test262 Dashboard Report Model
//!
//! Data model for the conformance snapshots published by a test262 run:
//! the latest snapshot per branch, the historical series, and the
//! recursive suite tree inside a snapshot.
//!
//! The types mirror the JSON the harness writes (`latest.json`,
//! `results.json`); unknown fields are tolerated and missing counters
//! default to zero.

#![warn(clippy::all)]

pub mod release;
pub mod snapshot;
pub mod stats;

pub use release::Release;
pub use snapshot::{ReportError, ResultsHistory, SnapshotData, SuiteResult, SuiteTree};
pub use stats::{conformance, failed_count};
