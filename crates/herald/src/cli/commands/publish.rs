//! Publish command

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::{info, warn};

use herald_core::config::load_config_or_default;
use herald_core::{ReleaseInputs, ReleaseSettings};
use herald_git::GitRepo;
use herald_github::{GitHubClient, GitHubConfig};

use super::VersionArgs;
use crate::cli::{output, Cli, OutputFormat};
use crate::workflow::{prepare, PublishReport, ReleasePlan, ReleaseWorkflow};

/// Tag, release and upload assets for a version
#[derive(Debug, Args)]
pub struct PublishCommand {
    #[command(flatten)]
    pub inputs: VersionArgs,

    /// Assets to upload: JSON array, or comma/newline separated paths and globs
    #[arg(long, env = "INPUT_ASSETS")]
    pub assets: Option<String>,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Commit to tag [default: HEAD of the local repository]
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Release name [default: from release.name_template]
    #[arg(long)]
    pub name: Option<String>,

    /// Create the release as a draft
    #[arg(long)]
    pub draft: bool,

    /// Force the prerelease flag on or off [default: detect from version]
    #[arg(long)]
    pub prerelease: Option<bool>,

    /// Show what would be published without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl PublishCommand {
    /// Execute the publish command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            version = ?self.inputs.version,
            dry_run = self.dry_run,
            draft = self.draft,
            "executing publish command"
        );
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&self.inputs.config_dir(&cwd))?;

        if config_path.is_none() && cli.verbose {
            output::info("No herald configuration found, using defaults.");
        }

        let settings = self.to_inputs().resolve(&config, &cwd)?;

        let rt = tokio::runtime::Runtime::new()?;
        let plan = rt.block_on(prepare(&settings))?;

        if !cli.quiet && cli.format == OutputFormat::Text {
            print_preview(&settings, &plan, self.dry_run);
        }

        if self.dry_run {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else if !cli.quiet {
                output::success("Dry run complete. Nothing was published.");
            }
            return Ok(());
        }

        let repository = settings.require_repository()?;
        let token = settings.require_token()?;
        let sha = resolve_sha(&settings)?;

        if !self.yes && console::user_attended() {
            let confirmed = Confirm::new()
                .with_prompt(format!("Publish {} at {}?", plan.tag, short_sha(&sha)))
                .default(true)
                .interact()?;

            if !confirmed {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let client = GitHubClient::new(
            GitHubConfig::new(repository, token)?.with_api_url(&settings.api_url),
        )?;
        let report = rt.block_on(ReleaseWorkflow::new(&client).publish(&plan, &sha))?;

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => {
                if !cli.quiet {
                    print_report(&report);
                }
            }
        }

        Ok(())
    }

    fn to_inputs(&self) -> ReleaseInputs {
        ReleaseInputs {
            assets: self.assets.clone(),
            repository: self.repository.clone(),
            token: self.token.clone(),
            sha: self.sha.clone(),
            api_url: self.api_url.clone(),
            name: self.name.clone(),
            draft: self.draft.then_some(true),
            prerelease: self.prerelease,
            ..self.inputs.to_inputs()
        }
    }
}

/// Commit to tag: the explicit SHA, or HEAD of the workspace repository
fn resolve_sha(settings: &ReleaseSettings) -> anyhow::Result<String> {
    if let Some(sha) = &settings.sha {
        return Ok(sha.clone());
    }

    let repo = GitRepo::discover(&settings.workspace)?;
    let sha = repo.head_sha()?;

    if let Some(existing) = repo.find_tag(settings.tag())? {
        if !existing.points_at(&sha) {
            warn!(
                tag = %existing.name,
                local = %existing.commit_hash,
                head = %sha,
                "local tag points at a different commit"
            );
        }
    }

    Ok(sha)
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}

fn print_preview(settings: &ReleaseSettings, plan: &ReleasePlan, dry_run: bool) {
    println!("{}", style("Release Preview").bold());
    println!();
    println!("{}", output::key_value("Tag", &style(&plan.tag).yellow().to_string()));
    println!("{}", output::key_value("Name", &plan.name));
    println!(
        "{}",
        output::key_value("Changelog", &settings.changelog_file.display().to_string())
    );
    if let Some(repo) = &settings.repository {
        println!("{}", output::key_value("Repository", repo));
    }
    println!("{}", output::key_value("Draft", &plan.draft.to_string()));
    println!("{}", output::key_value("Prerelease", &plan.prerelease.to_string()));
    println!("{}", output::key_value("Assets", &plan.assets.len().to_string()));
    for asset in &plan.assets {
        println!("    {}", style(asset.display()).cyan());
    }
    println!();

    if dry_run {
        println!("{}", style(&plan.section.content).dim());
        println!();
        println!("  {}", style("[DRY RUN - no changes will be made]").yellow().bold());
        println!();
    }

    if plan.assets_requested && plan.assets.is_empty() {
        output::warning("No matching assets found for the specified patterns");
    }
}

fn print_report(report: &PublishReport) {
    output::success(&format!(
        "Created tag {} at {}",
        style(&report.tag).yellow(),
        short_sha(&report.sha)
    ));
    output::success(&format!(
        "Published release {}",
        style(&report.release_url).cyan()
    ));
    for asset in &report.uploaded {
        output::success(&format!("Uploaded asset {}", asset.name));
    }
    for failure in &report.failed {
        let status = failure
            .status
            .map(|code| format!(" (HTTP {})", code))
            .unwrap_or_default();
        output::warning(&format!(
            "Failed to upload {}{}: {}",
            failure.path.display(),
            status,
            failure.error
        ));
    }
    if !report.is_complete() {
        output::warning(&format!(
            "{} of {} assets failed to upload",
            report.failed.len(),
            report.failed.len() + report.uploaded.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::Config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn command(version: &str) -> PublishCommand {
        PublishCommand {
            inputs: VersionArgs {
                version: Some(version.to_string()),
                changelog_file: None,
                workspace: None,
            },
            assets: None,
            repository: Some("octo/hello".to_string()),
            token: Some("secret".to_string()),
            sha: None,
            api_url: None,
            name: None,
            draft: false,
            prerelease: None,
            dry_run: false,
            yes: true,
        }
    }

    #[test]
    fn test_to_inputs_draft_flag() {
        let cmd = command("v1.0.0");
        assert_eq!(cmd.to_inputs().draft, None);

        let mut cmd = command("v1.0.0");
        cmd.draft = true;
        assert_eq!(cmd.to_inputs().draft, Some(true));
    }

    #[test]
    fn test_explicit_sha_wins() {
        let mut cmd = command("v1.0.0");
        cmd.sha = Some("abc123".to_string());
        let settings = cmd
            .to_inputs()
            .resolve(&Config::default(), &PathBuf::from("/nonexistent"))
            .unwrap();
        assert_eq!(resolve_sha(&settings).unwrap(), "abc123");
    }

    #[test]
    fn test_sha_requires_repository() {
        let temp = TempDir::new().unwrap();
        let mut cmd = command("v1.0.0");
        cmd.inputs.workspace = Some(temp.path().to_path_buf());
        let settings = cmd
            .to_inputs()
            .resolve(&Config::default(), temp.path())
            .unwrap();
        assert!(resolve_sha(&settings).is_err());
    }

    fn quiet_cli() -> Cli {
        use clap::Parser;
        Cli::try_parse_from(["herald", "--quiet", "completions", "bash"]).unwrap()
    }

    #[test]
    fn test_dry_run_needs_no_credentials() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("CHANGELOG.md"), "## v1.0.0\n- one").unwrap();

        let mut cmd = command("v1.0.0");
        cmd.inputs.workspace = Some(temp.path().to_path_buf());
        cmd.repository = None;
        cmd.token = None;
        cmd.dry_run = true;

        cmd.execute(&quiet_cli()).unwrap();
        assert!(!temp.path().join("CHANGELOG_temp.md").exists());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_dry_run_reads_workspace_config() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("docs")).unwrap();
        std::fs::write(temp.path().join("docs/CHANGES.md"), "## v1.0.0\n- one").unwrap();
        std::fs::write(
            temp.path().join("herald.toml"),
            "[changelog]\nfile = \"docs/CHANGES.md\"\n",
        )
        .unwrap();

        let mut cmd = command("v1.0.0");
        cmd.inputs.workspace = Some(temp.path().to_path_buf());
        cmd.dry_run = true;

        cmd.execute(&quiet_cli()).unwrap();
    }

    #[test]
    fn test_dry_run_missing_version_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("CHANGELOG.md"), "## v1.0.0\n- one").unwrap();

        let mut cmd = command("v2.0.0");
        cmd.inputs.workspace = Some(temp.path().to_path_buf());
        cmd.dry_run = true;

        let err = cmd.execute(&quiet_cli()).unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::CHANGELOG_ERROR);
    }

    #[test]
    fn test_short_sha() {
        assert_eq!(short_sha("0123456789abcdef"), "0123456");
        assert_eq!(short_sha("abc"), "abc");
    }
}
