//! Error types for Herald

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using HeraldError
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Main error type for Herald operations
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Asset resolution errors
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required field
    #[error("Missing required input: {0}")]
    MissingField(String),

    /// Asset list could not be parsed
    #[error("Failed to parse assets input: {0}")]
    MalformedAssets(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Requested version has no section in the changelog
    #[error("Version {version} not found in changelog{}", format_available(.available))]
    VersionNotFound {
        version: String,
        available: Vec<String>,
    },

    /// IO error
    #[error("IO error reading changelog: {0}")]
    Io(#[from] std::io::Error),
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(" (available: {})", available.join(", "))
    }
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// No commits found
    #[error("No commits found in repository")]
    NoCommits,

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Asset resolution errors
#[derive(Debug, Error)]
pub enum AssetError {
    /// Glob pattern is invalid
    #[error("Invalid asset pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// A glob match could not be read
    #[error("Failed to read asset match: {0}")]
    Glob(#[from] glob::GlobError),
}
