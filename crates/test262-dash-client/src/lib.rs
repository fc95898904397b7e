//! # Test262 Dashboard Client
//!
//! HTTP retrieval of the resources the dashboard renders: the harness
//! metadata (`info.json`), the per-branch snapshots (`latest.json`,
//! `results.json`), and the project's GitHub releases.
//!
//! No retries and no backoff: a failed fetch surfaces as a [`ClientError`]
//! and the caller decides what to do with it.

#![warn(clippy::all)]

pub mod error;
pub mod github;
pub mod reports;

pub use error::ClientError;
pub use github::GithubClient;
pub use reports::ReportClient;
