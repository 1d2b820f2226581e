//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_API_URL, DEFAULT_CHANGELOG_FILE, DEFAULT_NAME_TEMPLATE, DEFAULT_NOTES_FILE,
};

/// Project configuration for Herald
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Release configuration
    pub release: ReleaseConfig,

    /// Asset paths or glob patterns to upload
    pub assets: Vec<String>,

    /// GitHub API configuration
    pub github: GitHubConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Path to the changelog document
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
        }
    }
}

/// Release configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Release name template (e.g., "Release {version}")
    pub name_template: String,

    /// Publish the release as a draft
    pub draft: bool,

    /// Mark the release as a prerelease. Unset means detect from the version.
    pub prerelease: Option<bool>,

    /// Transient file holding the release body, relative to the workspace
    pub notes_file: PathBuf,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            name_template: DEFAULT_NAME_TEMPLATE.to_string(),
            draft: false,
            prerelease: None,
            notes_file: PathBuf::from(DEFAULT_NOTES_FILE),
        }
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the REST API
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
