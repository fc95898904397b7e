//! Application state and network bootstrap
//!
//! The published dashboard kept its fetched data in module-level globals
//! mutated by fire-and-forget callbacks. Here the same data lives in an
//! explicit [`DashboardState`] handle: the loaders run concurrently,
//! return `Result`s, and the bootstrap folds each one in with an explicit
//! log-and-ignore policy. A loader that fails leaves its slot empty, and
//! the corresponding page section stays unrendered.

use std::collections::BTreeMap;

use futures::future::join_all;
use tracing::{debug, info, warn};

use test262_dash_client::{GithubClient, ReportClient};
use test262_dash_report::{ResultsHistory, SnapshotData};

use crate::config::DashboardConfig;

/// Everything the renderers read, keyed by branch/tag where applicable.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Harness metadata (`info.json`), opaque
    pub info: Option<serde_json::Value>,
    /// Latest complete snapshot per branch/tag
    pub latest: BTreeMap<String, SnapshotData>,
    /// Historical snapshot series per branch
    pub history: BTreeMap<String, ResultsHistory>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for a branch/tag, if its loader has populated it.
    ///
    /// A lookup before population is fine; the caller renders a
    /// placeholder instead of failing.
    pub fn snapshot_for(&self, tag: &str) -> Option<&SnapshotData> {
        let snap = self.latest.get(tag);
        if snap.is_none() {
            debug!(tag, "no snapshot loaded for tag");
        }
        snap
    }

    pub fn history_for(&self, branch: &str) -> Option<&ResultsHistory> {
        self.history.get(branch)
    }
}

/// Load every dashboard resource concurrently and fold the results into a
/// fresh state.
///
/// The four loader groups (info, per-branch latest, per-branch history,
/// releases) run as independent futures with no ordering constraint
/// between them. Failures are logged and ignored: the dashboard renders
/// whatever did load.
pub async fn bootstrap(
    reports: &ReportClient,
    github: &GithubClient,
    config: &DashboardConfig,
) -> DashboardState {
    let mut state = DashboardState::new();

    let latest_loads = join_all(
        config
            .branches
            .iter()
            .map(|branch| async move { (branch.clone(), reports.fetch_latest(branch).await) }),
    );
    let history_loads = join_all(
        config
            .branches
            .iter()
            .map(|branch| async move { (branch.clone(), reports.fetch_history(branch).await) }),
    );

    let (info, latest, history, releases) = tokio::join!(
        reports.fetch_info(),
        latest_loads,
        history_loads,
        github.fetch_releases(&config.repo),
    );

    match info {
        Ok(value) => state.info = Some(value),
        Err(e) => warn!("failed to load test262 info: {e}"),
    }

    for (branch, result) in latest {
        match result {
            Ok(snapshot) => {
                state.latest.insert(branch, snapshot);
            }
            Err(e) => warn!(branch = %branch, "failed to load latest snapshot: {e}"),
        }
    }

    for (branch, result) in history {
        match result {
            Ok(series) => {
                state.history.insert(branch, series);
            }
            Err(e) => warn!(branch = %branch, "failed to load results history: {e}"),
        }
    }

    // The release listing feeds nothing on the page yet; the tags are
    // logged so the data path stays observable.
    match releases {
        Ok(releases) => {
            for release in &releases {
                info!(tag = %release.tag_name, "release");
            }
        }
        Err(e) => warn!("failed to load releases: {e}"),
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_before_population_is_none() {
        let state = DashboardState::new();
        assert!(state.snapshot_for("master").is_none());
        assert!(state.history_for("master").is_none());
    }

    #[test]
    fn lookup_after_population() {
        let mut state = DashboardState::new();
        state.latest.insert(
            "master".to_string(),
            SnapshotData {
                commit: "abc".to_string(),
                total: 10,
                passed: 8,
                ignored: 1,
                results: None,
            },
        );

        assert_eq!(state.snapshot_for("master").unwrap().passed, 8);
        assert!(state.snapshot_for("v0.17").is_none());
    }
}
