//! TOML configuration for the dashboard

use serde::Deserialize;
use std::path::Path;

const DEFAULT_BASE_URL: &str = "https://boa-dev.github.io";
const DEFAULT_REPO: &str = "boa-dev/boa";

/// Dashboard configuration loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL the report resources are published under
    pub base_url: String,

    /// GitHub repository (`owner/name`) for commit links and releases
    pub repo: String,

    /// Branches to load snapshots for
    pub branches: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            repo: DEFAULT_REPO.to_string(),
            branches: vec!["master".to_string()],
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config '{}': {}", path.display(), e))
    }

    /// Try to load from the given or default location, fall back to
    /// defaults if not found.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("{e}");
                    Self::default()
                }
            }
        } else {
            let default_path = Path::new("dashboard.toml");
            if default_path.exists() {
                match Self::load(default_path) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("{e}");
                        Self::default()
                    }
                }
            } else {
                Self::default()
            }
        }
    }

    /// The first configured branch, the one the summary sections render.
    pub fn primary_branch(&self) -> &str {
        self.branches.first().map(String::as_str).unwrap_or("master")
    }
}
