//! CLI commands

mod completions;
mod extract;
mod init;
mod publish;

pub use completions::CompletionsCommand;
pub use extract::ExtractCommand;
pub use init::InitCommand;
pub use publish::PublishCommand;

use std::path::{Path, PathBuf};

use clap::Args;

use herald_core::ReleaseInputs;

/// Inputs shared by commands that look up a version
#[derive(Debug, Clone, Args)]
pub struct VersionArgs {
    /// Version label to look up, tag and release under
    #[arg(long = "version", id = "release_version", env = "INPUT_VERSION")]
    pub version: Option<String>,

    /// Changelog file [default: CHANGELOG.md]
    #[arg(long, env = "INPUT_CHANGELOG-FILE")]
    pub changelog_file: Option<PathBuf>,

    /// Workspace that relative paths resolve against [default: current directory]
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<PathBuf>,
}

impl VersionArgs {
    /// Directory the project configuration is searched from: the workspace
    /// when one is given, else `cwd`
    pub fn config_dir(&self, cwd: &Path) -> PathBuf {
        match &self.workspace {
            Some(dir) if !dir.as_os_str().is_empty() => cwd.join(dir),
            _ => cwd.to_path_buf(),
        }
    }

    /// Start a set of release inputs from these arguments
    pub fn to_inputs(&self) -> ReleaseInputs {
        ReleaseInputs {
            version: self.version.clone(),
            changelog_file: self.changelog_file.clone(),
            workspace: self.workspace.clone(),
            ..Default::default()
        }
    }
}
