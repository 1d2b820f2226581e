//! Local repository access

use std::path::Path;

use git2::{ErrorCode, Repository};
use tracing::{debug, instrument};

use herald_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// A local git repository
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `start`, searching parent directories
    #[instrument(fields(start = %start.display()))]
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::NotARepository(start.to_path_buf()),
            _ => GitError::OpenFailed(e.to_string()),
        })?;
        debug!(git_dir = %repo.path().display(), "opened git repository");
        Ok(Self { repo })
    }

    /// Full hash of the commit HEAD points at
    pub fn head_sha(&self) -> Result<String> {
        let head = self.repo.head().map_err(|e| match e.code() {
            ErrorCode::UnbornBranch | ErrorCode::NotFound => GitError::NoCommits,
            _ => GitError::Git2(e),
        })?;
        let sha = head.peel_to_commit()?.id().to_string();
        debug!(sha = %sha, "resolved HEAD commit");
        Ok(sha)
    }
}
