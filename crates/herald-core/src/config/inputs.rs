//! Invocation inputs and their resolution into release settings
//!
//! Inputs arrive from CLI flags or their environment fallbacks (GitHub
//! Actions exposes action inputs as `INPUT_<NAME>` variables). Unset
//! optional inputs are frequently present as empty strings, so empty values
//! are treated as absent. [`ReleaseInputs::resolve`] is the single place
//! where inputs, the project file and defaults are merged.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::assets::parse_asset_list;
use crate::error::{ConfigError, Result};

use super::types::Config;
use super::validation::validate_api_url;

/// Raw invocation inputs, before defaults are applied
#[derive(Debug, Clone, Default)]
pub struct ReleaseInputs {
    /// Version label to look up, tag and release under
    pub version: Option<String>,
    /// Changelog path override
    pub changelog_file: Option<PathBuf>,
    /// Asset list override (JSON array, or comma/newline separated)
    pub assets: Option<String>,
    /// Repository slug (`owner/repo`)
    pub repository: Option<String>,
    /// API token
    pub token: Option<String>,
    /// Commit to tag
    pub sha: Option<String>,
    /// Workspace directory that relative paths resolve against
    pub workspace: Option<PathBuf>,
    /// API base URL override
    pub api_url: Option<String>,
    /// Release name override
    pub name: Option<String>,
    /// Publish as draft
    pub draft: Option<bool>,
    /// Prerelease override
    pub prerelease: Option<bool>,
}

/// Fully resolved settings for one release run
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseSettings {
    /// Version label, also used as the tag name
    pub version: String,
    /// Release display name
    pub name: String,
    /// Absolute path of the changelog document
    pub changelog_file: PathBuf,
    /// Asset paths or glob patterns
    pub assets: Vec<String>,
    /// Repository slug (`owner/repo`)
    pub repository: Option<String>,
    /// API token
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Commit to tag; resolved from the local repository when absent
    pub sha: Option<String>,
    /// Workspace directory
    pub workspace: PathBuf,
    /// API base URL
    pub api_url: String,
    /// Publish as draft
    pub draft: bool,
    /// Publish as prerelease
    pub prerelease: bool,
    /// Transient release-notes file
    pub notes_file: PathBuf,
}

impl ReleaseInputs {
    /// Merge inputs with the project configuration and defaults
    pub fn resolve(self, config: &Config, cwd: &Path) -> Result<ReleaseSettings> {
        let version = non_empty(self.version)
            .map(|v| v.trim().to_string())
            .ok_or_else(|| ConfigError::MissingField("version".to_string()))?;

        let workspace = self
            .workspace
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| absolutize(cwd, &p))
            .unwrap_or_else(|| cwd.to_path_buf());

        let changelog_file = self
            .changelog_file
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| config.changelog.file.clone());
        let changelog_file = absolutize(&workspace, &changelog_file);

        let assets = match non_empty(self.assets) {
            Some(raw) => parse_asset_list(&raw)?,
            None => config.assets.clone(),
        };

        let repository = non_empty(self.repository);
        if let Some(repo) = &repository {
            validate_repository(repo)?;
        }

        let api_url = non_empty(self.api_url)
            .unwrap_or_else(|| config.github.api_url.clone())
            .trim_end_matches('/')
            .to_string();
        validate_api_url(&api_url)?;

        let name = match non_empty(self.name) {
            Some(name) => name,
            None => config.release.name_template.replace("{version}", &version),
        };

        let prerelease = self
            .prerelease
            .or(config.release.prerelease)
            .unwrap_or_else(|| detect_prerelease(&version));

        let settings = ReleaseSettings {
            name,
            changelog_file,
            assets,
            repository,
            token: non_empty(self.token),
            sha: non_empty(self.sha),
            api_url,
            draft: self.draft.unwrap_or(config.release.draft),
            prerelease,
            notes_file: absolutize(&workspace, &config.release.notes_file),
            workspace,
            version,
        };

        debug!(
            version = %settings.version,
            changelog = %settings.changelog_file.display(),
            assets = settings.assets.len(),
            prerelease = settings.prerelease,
            "resolved release settings"
        );
        Ok(settings)
    }
}

impl ReleaseSettings {
    /// Tag name for the release
    pub fn tag(&self) -> &str {
        &self.version
    }

    /// Repository slug, required for remote operations
    pub fn require_repository(&self) -> Result<&str> {
        self.repository
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField("repository (GITHUB_REPOSITORY)".to_string()).into())
    }

    /// API token, required for remote operations
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField("token (GITHUB_TOKEN)".to_string()).into())
    }
}

/// Whether a version label denotes a prerelease (e.g. `v1.0.0-rc.1`)
pub fn detect_prerelease(version: &str) -> bool {
    let version = version.strip_prefix('v').unwrap_or(version);
    semver::Version::parse(version)
        .map(|v| !v.pre.is_empty())
        .unwrap_or(false)
}

fn validate_repository(repo: &str) -> Result<()> {
    let mut parts = repo.split('/');
    let valid = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
    );

    if !valid {
        return Err(ConfigError::InvalidValue {
            field: "repository".to_string(),
            message: format!("expected owner/repo, got '{}'", repo),
        }
        .into());
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeraldError;

    fn inputs(version: &str) -> ReleaseInputs {
        ReleaseInputs {
            version: Some(version.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_version_is_required() {
        let result = ReleaseInputs::default().resolve(&Config::default(), Path::new("/work"));
        assert!(matches!(
            result,
            Err(HeraldError::Config(ConfigError::MissingField(_)))
        ));

        let result = inputs("   ").resolve(&Config::default(), Path::new("/work"));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_applied() {
        let settings = inputs("v1.0.0")
            .resolve(&Config::default(), Path::new("/work"))
            .unwrap();

        assert_eq!(settings.version, "v1.0.0");
        assert_eq!(settings.tag(), "v1.0.0");
        assert_eq!(settings.name, "v1.0.0");
        assert_eq!(settings.changelog_file, PathBuf::from("/work/CHANGELOG.md"));
        assert_eq!(settings.notes_file, PathBuf::from("/work/CHANGELOG_temp.md"));
        assert!(settings.assets.is_empty());
        assert_eq!(settings.api_url, "https://api.github.com");
        assert!(!settings.draft);
        assert!(!settings.prerelease);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let raw = ReleaseInputs {
            version: Some("v1.0.0".to_string()),
            assets: Some(String::new()),
            token: Some(String::new()),
            repository: Some("".to_string()),
            ..Default::default()
        };
        let mut config = Config::default();
        config.assets = vec!["dist/*.zip".to_string()];

        let settings = raw.resolve(&config, Path::new("/work")).unwrap();
        assert_eq!(settings.assets, vec!["dist/*.zip".to_string()]);
        assert!(settings.token.is_none());
        assert!(settings.require_token().is_err());
        assert!(settings.require_repository().is_err());
    }

    #[test]
    fn test_inputs_override_config() {
        let mut config = Config::default();
        config.release.name_template = "Release {version}".to_string();
        config.release.draft = true;

        let raw = ReleaseInputs {
            version: Some("v2.0.0".to_string()),
            changelog_file: Some(PathBuf::from("docs/CHANGES.md")),
            assets: Some("a.zip, b.tar.gz".to_string()),
            workspace: Some(PathBuf::from("/ws")),
            draft: Some(false),
            ..Default::default()
        };
        let settings = raw.resolve(&config, Path::new("/cwd")).unwrap();

        assert_eq!(settings.name, "Release v2.0.0");
        assert!(!settings.draft);
        assert_eq!(settings.changelog_file, PathBuf::from("/ws/docs/CHANGES.md"));
        assert_eq!(settings.assets, vec!["a.zip", "b.tar.gz"]);
        assert_eq!(settings.workspace, PathBuf::from("/ws"));
    }

    #[test]
    fn test_malformed_assets_rejected() {
        let raw = ReleaseInputs {
            version: Some("v1.0.0".to_string()),
            assets: Some("[\"a.zip\",".to_string()),
            ..Default::default()
        };
        let result = raw.resolve(&Config::default(), Path::new("/work"));
        assert!(matches!(
            result,
            Err(HeraldError::Config(ConfigError::MalformedAssets(_)))
        ));
    }

    #[test]
    fn test_repository_slug_validated() {
        let mut raw = inputs("v1.0.0");
        raw.repository = Some("owner/repo".to_string());
        let settings = raw.resolve(&Config::default(), Path::new("/w")).unwrap();
        assert_eq!(settings.require_repository().unwrap(), "owner/repo");

        for bad in ["owner", "owner/", "/repo", "a/b/c"] {
            let mut raw = inputs("v1.0.0");
            raw.repository = Some(bad.to_string());
            assert!(raw.resolve(&Config::default(), Path::new("/w")).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let mut raw = inputs("v1.0.0");
        raw.api_url = Some("https://ghe.example.com/api/v3/".to_string());
        let settings = raw.resolve(&Config::default(), Path::new("/w")).unwrap();
        assert_eq!(settings.api_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_detect_prerelease() {
        assert!(detect_prerelease("v1.0.0-rc.1"));
        assert!(detect_prerelease("2.0.0-beta"));
        assert!(!detect_prerelease("v1.0.0"));
        assert!(!detect_prerelease("release-2024"));
    }

    #[test]
    fn test_prerelease_precedence() {
        let mut config = Config::default();
        let settings = inputs("v1.0.0-rc.1")
            .resolve(&config, Path::new("/w"))
            .unwrap();
        assert!(settings.prerelease);

        config.release.prerelease = Some(false);
        let settings = inputs("v1.0.0-rc.1")
            .resolve(&config, Path::new("/w"))
            .unwrap();
        assert!(!settings.prerelease);

        let mut raw = inputs("v1.0.0");
        raw.prerelease = Some(true);
        assert!(raw.resolve(&config, Path::new("/w")).unwrap().prerelease);
    }
}
