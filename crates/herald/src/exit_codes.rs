//! Exit codes for the CLI

use herald_core::error::{AssetError, ChangelogError, ConfigError, GitError, HeraldError};
use herald_github::GitHubError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error, including rejected remote calls
pub const ERROR: i32 = 1;

/// Configuration or malformed input error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Changelog file or version not found
pub const CHANGELOG_ERROR: i32 = 4;

/// Map a failure to its exit code, using the first typed error in the chain
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<HeraldError>() {
            return match err {
                HeraldError::Config(_) | HeraldError::Asset(_) => CONFIG_ERROR,
                HeraldError::Changelog(_) => CHANGELOG_ERROR,
                HeraldError::Git(_) => GIT_ERROR,
                HeraldError::Io(_) => ERROR,
            };
        }
        if cause.is::<ConfigError>() || cause.is::<AssetError>() {
            return CONFIG_ERROR;
        }
        if cause.is::<ChangelogError>() {
            return CHANGELOG_ERROR;
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if cause.is::<GitHubError>() {
            return ERROR;
        }
    }
    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_typed_errors() {
        let err = anyhow::Error::from(ChangelogError::FileNotFound(PathBuf::from("x.md")));
        assert_eq!(for_error(&err), CHANGELOG_ERROR);

        let err = anyhow::Error::from(HeraldError::from(ConfigError::MalformedAssets(
            "bad".to_string(),
        )));
        assert_eq!(for_error(&err), CONFIG_ERROR);

        let err = anyhow::Error::from(GitError::NoCommits);
        assert_eq!(for_error(&err), GIT_ERROR);
    }

    #[test]
    fn test_context_is_skipped() {
        let result: Result<(), GitHubError> = Err(GitHubError::ApiError {
            status: 422,
            message: "exists".to_string(),
        });
        let err = result.context("Failed to create tag v1.0.0").unwrap_err();
        assert_eq!(for_error(&err), ERROR);
    }

    #[test]
    fn test_untyped_error() {
        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        assert_ne!(SUCCESS, ERROR);
    }
}
