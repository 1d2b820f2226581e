//! Shell completions

use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::{output, Cli};

const BIN_NAME: &str = "herald";

/// Print a completion script for a shell
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "executing completions command");
        let mut cmd = Cli::command();

        let Some(path) = &self.output else {
            generate(self.shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
            return Ok(());
        };

        let mut file = std::fs::File::create(path)?;
        generate(self.shell, &mut cmd, BIN_NAME, &mut file);
        if !cli.quiet {
            output::success(&format!("Wrote {} completions to {}", self.shell, path.display()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_script_lists_subcommands() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut cmd, BIN_NAME, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("publish"));
        assert!(script.contains("extract"));
    }

    #[test]
    fn test_parse_shell() {
        let cli = Cli::try_parse_from(["herald", "completions", "zsh"]).unwrap();
        match cli.command {
            crate::cli::Commands::Completions(cmd) => assert_eq!(cmd.shell, Shell::Zsh),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
