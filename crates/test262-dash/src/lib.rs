//! # Test262 Dashboard
//!
//! Turns the JSON snapshots a test262 run publishes into a conformance
//! dashboard: a static HTML page, a Markdown document, or a terminal
//! summary.
//!
//! The loaders run concurrently and return `Result`s; the bootstrap in
//! [`state`] folds them into an explicit [`state::DashboardState`] handle
//! with a log-and-ignore policy, so a failed resource leaves its section
//! unrendered instead of aborting the whole page.

#![warn(clippy::all)]

pub mod compare;
pub mod config;
pub mod render;
pub mod state;

pub use compare::SnapshotComparison;
pub use config::DashboardConfig;
pub use state::DashboardState;
