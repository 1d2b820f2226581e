//! GitHub REST API client
//!
//! ## Authentication
//!
//! Uses a bearer token, normally the workflow's `GITHUB_TOKEN`.

use std::path::Path;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};
use url::Url;

use crate::content_type::content_type_for;
use crate::error::{GitHubError, Result};
use crate::traits::ReleaseHost;
use crate::types::{Asset, NewRelease, Release, Repository};

const DEFAULT_API_URL: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github+json";

/// Client configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Target repository
    pub repository: Repository,
    /// Bearer token
    pub token: String,
    /// REST API base URL, without trailing slash
    pub api_url: String,
}

impl GitHubConfig {
    /// Configuration for the public API
    pub fn new(repository: &str, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            repository: Repository::parse(repository)?,
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
        })
    }

    /// Use a different API base URL (GitHub Enterprise, tests)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// API error body
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// GitHub releases client
pub struct GitHubClient {
    config: GitHubConfig,
    client: Client,
}

impl GitHubClient {
    /// Create a new client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    fn repo_url(&self, endpoint: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.config.api_url, self.config.repository.owner, self.config.repository.name, endpoint
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Accept", ACCEPT)
            .header("Authorization", format!("Bearer {}", self.config.token))
    }

    /// Send a request and fail on non-success status
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = self.authorized(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .map(|body| body.message)
                .unwrap_or(error_text);
            return Err(GitHubError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

/// Build the upload endpoint for one file from a release's URL template
pub fn upload_url(template: &str, file_name: &str) -> Result<Url> {
    let base = template.split('{').next().unwrap_or(template);
    let mut url =
        Url::parse(base).map_err(|e| GitHubError::InvalidUploadUrl(format!("{}: {}", template, e)))?;
    url.query_pairs_mut().append_pair("name", file_name);
    Ok(url)
}

#[async_trait::async_trait]
impl ReleaseHost for GitHubClient {
    #[instrument(skip(self), fields(repo = %self.config.repository))]
    async fn create_tag_ref(&self, tag: &str, sha: &str) -> Result<()> {
        let body = serde_json::json!({
            "ref": format!("refs/tags/{}", tag),
            "sha": sha,
        });

        debug!("creating tag reference");
        self.send(self.client.post(self.repo_url("/git/refs")).json(&body))
            .await?;

        info!(tag, sha, "created tag reference");
        Ok(())
    }

    #[instrument(skip(self, release), fields(repo = %self.config.repository, tag = %release.tag_name))]
    async fn create_release(&self, release: &NewRelease) -> Result<Release> {
        debug!(draft = release.draft, prerelease = release.prerelease, "creating release");
        let response = self
            .send(self.client.post(self.repo_url("/releases")).json(release))
            .await?;

        let created: Release = response.json().await?;
        info!(id = created.id, url = %created.html_url, "created release");
        Ok(created)
    }

    #[instrument(skip(self, release), fields(release_id = release.id, path = %path.display()))]
    async fn upload_asset(&self, release: &Release, path: &Path) -> Result<Asset> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GitHubError::InvalidAsset(path.display().to_string()))?;
        let content_type = content_type_for(path);
        let url = upload_url(&release.upload_url, file_name)?;

        let content = tokio::fs::read(path).await?;
        let size = content.len();
        debug!(file_name, content_type, size, "uploading asset");

        let response = self
            .send(
                self.client
                    .post(url)
                    .header("Content-Type", content_type)
                    .body(content),
            )
            .await?;

        let asset: Asset = response.json().await?;
        info!(name = %asset.name, id = asset.id, "uploaded asset");
        Ok(asset)
    }
}
