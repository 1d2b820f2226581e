//! Release publishing workflow
//!
//! A run has two phases. [`prepare`] does all local work (changelog
//! extraction, asset resolution) so that bad inputs fail before any remote
//! call. [`ReleaseWorkflow::publish`] then performs the remote steps in
//! order: tag, release, assets. A failed tag or release aborts the run;
//! nothing already created is rolled back. A failed asset upload is logged
//! and recorded, and the remaining uploads continue.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use herald_changelog::{ChangelogParser, VersionSection};
use herald_core::error::ChangelogError;
use herald_core::{resolve_assets, ReleaseSettings};
use herald_github::{Asset, NewRelease, ReleaseHost};

/// Everything needed to publish, computed without touching the network
#[derive(Debug, Clone, Serialize)]
pub struct ReleasePlan {
    /// Tag to create
    pub tag: String,
    /// Release display name
    pub name: String,
    /// Extracted changelog section
    pub section: VersionSection,
    /// Resolved asset files, in upload order
    pub assets: Vec<PathBuf>,
    /// Whether asset entries were configured at all
    #[serde(skip)]
    pub assets_requested: bool,
    /// Publish as draft
    pub draft: bool,
    /// Publish as prerelease
    pub prerelease: bool,
    /// Transient release-notes file
    #[serde(skip)]
    pub notes_file: PathBuf,
}

/// An asset that could not be uploaded
#[derive(Debug, Clone, Serialize)]
pub struct FailedUpload {
    /// Local path of the asset
    pub path: PathBuf,
    /// HTTP status when the API rejected the upload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Failure description
    pub error: String,
}

/// Outcome of a publish run
#[derive(Debug, Clone, Serialize)]
pub struct PublishReport {
    /// Created tag
    pub tag: String,
    /// Commit the tag points at
    pub sha: String,
    /// Release ID
    pub release_id: u64,
    /// Release web page
    pub release_url: String,
    /// Uploaded assets
    pub uploaded: Vec<Asset>,
    /// Assets that failed to upload
    pub failed: Vec<FailedUpload>,
}

impl PublishReport {
    /// Whether every asset was uploaded
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Extract the changelog section and resolve assets.
///
/// A missing changelog file fails with [`ChangelogError::FileNotFound`]; a
/// version without a section fails with [`ChangelogError::VersionNotFound`].
#[instrument(skip(settings), fields(version = %settings.version))]
pub async fn prepare(settings: &ReleaseSettings) -> anyhow::Result<ReleasePlan> {
    let parser = ChangelogParser::new(&settings.changelog_file)?;

    let section = match parser.extract_version(&settings.version).await? {
        Some(section) => section,
        None => {
            let available = parser.versions().await?;
            return Err(ChangelogError::VersionNotFound {
                version: settings.version.clone(),
                available,
            }
            .into());
        }
    };

    let assets = resolve_assets(&settings.assets, &settings.workspace)?;
    debug!(assets = assets.len(), "prepared release plan");

    Ok(ReleasePlan {
        tag: settings.tag().to_string(),
        name: settings.name.clone(),
        section,
        assets,
        assets_requested: !settings.assets.is_empty(),
        draft: settings.draft,
        prerelease: settings.prerelease,
        notes_file: settings.notes_file.clone(),
    })
}

/// Release notes staged on disk for the duration of a release request.
///
/// The file is removed when the guard drops, whether or not the request
/// succeeded.
struct NotesFile {
    path: PathBuf,
}

impl NotesFile {
    async fn write(path: &Path, content: &str) -> std::io::Result<Self> {
        tokio::fs::write(path, content).await?;
        debug!(path = %path.display(), "wrote release notes");
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    async fn read(&self) -> std::io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }
}

impl Drop for NotesFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove release notes file");
        }
    }
}

/// Runs the remote steps of a release against a host
pub struct ReleaseWorkflow<'a, H: ReleaseHost + ?Sized> {
    host: &'a H,
}

impl<'a, H: ReleaseHost + ?Sized> ReleaseWorkflow<'a, H> {
    /// Create a new workflow
    pub fn new(host: &'a H) -> Self {
        Self { host }
    }

    /// Create the tag and release, then upload assets
    #[instrument(skip(self, plan), fields(tag = %plan.tag))]
    pub async fn publish(&self, plan: &ReleasePlan, sha: &str) -> anyhow::Result<PublishReport> {
        self.host
            .create_tag_ref(&plan.tag, sha)
            .await
            .with_context(|| format!("Failed to create tag {}", plan.tag))?;

        let notes = NotesFile::write(&plan.notes_file, &plan.section.content)
            .await
            .context("Failed to write release notes")?;
        let body = notes.read().await.context("Failed to read release notes")?;

        let request = NewRelease::new(&plan.tag, body)
            .with_name(&plan.name)
            .with_draft(plan.draft)
            .with_prerelease(plan.prerelease);
        let created = self.host.create_release(&request).await;
        drop(notes);
        let release = created.with_context(|| format!("Failed to create release {}", plan.tag))?;

        let mut report = PublishReport {
            tag: plan.tag.clone(),
            sha: sha.to_string(),
            release_id: release.id,
            release_url: release.html_url.clone(),
            uploaded: Vec::new(),
            failed: Vec::new(),
        };

        if plan.assets_requested && plan.assets.is_empty() {
            warn!("No matching assets found for the specified patterns");
        }

        for path in &plan.assets {
            match self.host.upload_asset(&release, path).await {
                Ok(asset) => report.uploaded.push(asset),
                Err(e) => {
                    warn!(path = %path.display(), status = ?e.status(), error = %e, "failed to upload asset");
                    report.failed.push(FailedUpload {
                        path: path.clone(),
                        status: e.status(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            release_id = report.release_id,
            uploaded = report.uploaded.len(),
            failed = report.failed.len(),
            "published release"
        );
        Ok(report)
    }
}
