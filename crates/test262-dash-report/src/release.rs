//! GitHub release entries

use serde::{Deserialize, Serialize};

/// One entry of the GitHub releases listing.
///
/// Only `tag_name` is consumed by the dashboard; the rest is kept for
/// the `releases` listing output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
}
