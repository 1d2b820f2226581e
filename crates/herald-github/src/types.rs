//! Release API types

use serde::{Deserialize, Serialize};

use crate::error::GitHubError;

/// A repository on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Owning user or organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl Repository {
    /// Parse an `owner/repo` slug
    pub fn parse(slug: &str) -> Result<Self, GitHubError> {
        match slug.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(GitHubError::InvalidRepository(slug.to_string())),
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Request body for creating a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    /// Tag the release is attached to
    pub tag_name: String,
    /// Display name
    pub name: String,
    /// Markdown body
    pub body: String,
    /// Create as draft
    pub draft: bool,
    /// Mark as prerelease
    pub prerelease: bool,
}

impl NewRelease {
    /// A published, non-prerelease release named after its tag
    pub fn new(tag_name: impl Into<String>, body: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        Self {
            name: tag_name.clone(),
            tag_name,
            body: body.into(),
            draft: false,
            prerelease: false,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the draft flag
    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    /// Set the prerelease flag
    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }
}

/// A created release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Release ID
    pub id: u64,
    /// Tag name
    pub tag_name: String,
    /// Web page of the release
    #[serde(default)]
    pub html_url: String,
    /// Asset upload URL template (e.g. `.../assets{?name,label}`)
    pub upload_url: String,
}

/// An uploaded release asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset ID
    pub id: u64,
    /// File name
    pub name: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// Download URL
    #[serde(default)]
    pub browser_download_url: String,
}
