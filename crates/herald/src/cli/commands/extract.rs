//! Extract command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use herald_changelog::{ChangelogParser, VersionSection};
use herald_core::config::load_config_or_default;
use herald_core::error::ChangelogError;
use herald_core::ReleaseSettings;

use super::VersionArgs;
use crate::cli::{output, Cli, OutputFormat};

/// Print the changelog section for a version
#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub inputs: VersionArgs,

    /// Omit the version heading line
    #[arg(long)]
    pub body_only: bool,

    /// Write the section to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExtractCommand {
    /// Execute the extract command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.inputs.version, body_only = self.body_only, "executing extract command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&self.inputs.config_dir(&cwd))?;
        let settings = self.inputs.to_inputs().resolve(&config, &cwd)?;

        let rt = tokio::runtime::Runtime::new()?;
        let section = rt.block_on(extract(&settings))?;
        let text = if self.body_only {
            section.body()
        } else {
            section.content.as_str()
        };

        if let Some(path) = &self.output {
            std::fs::write(path, text)?;
            if !cli.quiet {
                output::success(&format!(
                    "Wrote {} notes to {}",
                    style(&section.version).green().bold(),
                    style(path.display()).cyan()
                ));
            }
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&section)?),
            OutputFormat::Text => println!("{}", text),
        }
        Ok(())
    }
}

/// Look up the section, turning an absent version into an error
async fn extract(settings: &ReleaseSettings) -> Result<VersionSection, ChangelogError> {
    let parser = ChangelogParser::new(&settings.changelog_file)?;
    match parser.extract_version(&settings.version).await? {
        Some(section) => Ok(section),
        None => Err(ChangelogError::VersionNotFound {
            version: settings.version.clone(),
            available: parser.versions().await?,
        }),
    }
}
