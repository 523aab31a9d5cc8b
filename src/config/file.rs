//! The JSON configuration document

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::github::DEFAULT_API_URL;

const SAMPLE_TOKEN: &str = "Replace with a token from https://github.com/settings/tokens";

/// One organization to mirror and the local directory its repositories live in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgEntry {
    pub org: String,
    pub path: PathBuf,
}

/// User configuration, read-only for the duration of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github_access_token: Option<String>,
    pub orgs: Vec<OrgEntry>,
    pub syncpoints: Vec<PathBuf>,
    /// Worker count; zero, negative or missing means "one per CPU"
    pub concurrency: Option<i64>,
    pub verbose: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_api_url: Option<String>,
}

impl Config {
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn api_url(&self) -> &str {
        self.github_api_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_URL)
    }

    /// Explicitly configured worker count, if it is usable
    pub fn configured_concurrency(&self) -> Option<usize> {
        self.concurrency
            .filter(|&n| n > 0)
            .and_then(|n| usize::try_from(n).ok())
    }
}

/// Reads and parses the configuration document at `path`
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// A ready-to-edit configuration document shown to first-time users
pub fn sample_config() -> Config {
    Config {
        github_access_token: Some(SAMPLE_TOKEN.to_string()),
        orgs: vec![OrgEntry {
            org: "myorgname".to_string(),
            path: PathBuf::from("/some/source/directory"),
        }],
        syncpoints: vec![PathBuf::from("/some/other/directory")],
        concurrency: i64::try_from(num_cpus::get()).ok(),
        verbose: Some(true),
        github_api_url: None,
    }
}

/// Pretty-printed JSON for [`sample_config`]
pub fn sample_config_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&sample_config())
}
