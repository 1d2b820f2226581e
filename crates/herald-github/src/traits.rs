//! Release host trait

use crate::error::Result;
use crate::types::{Asset, NewRelease, Release};
use std::path::Path;

/// A platform that can host tagged releases.
///
/// Each call is one remote operation; callers sequence them and decide how
/// failures propagate.
#[async_trait::async_trait]
pub trait ReleaseHost: Send + Sync {
    /// Create a tag reference pointing at a commit
    async fn create_tag_ref(&self, tag: &str, sha: &str) -> Result<()>;

    /// Create a release for an existing tag
    async fn create_release(&self, release: &NewRelease) -> Result<Release>;

    /// Upload one file as an asset of a release
    async fn upload_asset(&self, release: &Release, path: &Path) -> Result<Asset>;
}
