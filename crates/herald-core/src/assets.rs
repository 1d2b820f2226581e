//! Release asset list parsing and resolution
//!
//! Assets are supplied as a single string, either a JSON array of strings
//! or a comma/newline separated list. Each entry is a literal path or a glob
//! pattern; entries containing `*`, `?` or `[` are expanded against the
//! workspace directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{AssetError, ConfigError};

const GLOB_CHARS: &[char] = &['*', '?', '['];

/// Parse a raw asset input into a list of entries
pub fn parse_asset_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let trimmed = raw.trim();

    let entries: Vec<String> = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<String>>(trimmed).map_err(|e| {
            ConfigError::MalformedAssets(format!(
                "expected a JSON array of strings ({})",
                e
            ))
        })?
    } else {
        trimmed
            .split(|c| c == '\n' || c == ',')
            .map(str::to_string)
            .collect()
    };

    Ok(entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect())
}

/// Whether an entry should be expanded as a glob pattern
pub fn is_glob_pattern(entry: &str) -> bool {
    entry.contains(GLOB_CHARS)
}

/// Expand asset entries into concrete file paths.
///
/// Literal entries are joined to the workspace without checking that they
/// exist, so a missing file surfaces when it is read for upload. Results
/// keep the order in which they were first seen.
#[instrument(skip(entries), fields(workspace = %workspace.display(), count = entries.len()))]
pub fn resolve_assets(entries: &[String], workspace: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for entry in entries {
        if is_glob_pattern(entry) {
            let pattern = if Path::new(entry).is_absolute() {
                entry.clone()
            } else {
                workspace.join(entry).to_string_lossy().into_owned()
            };

            let paths = glob::glob(&pattern).map_err(|e| AssetError::Pattern {
                pattern: entry.clone(),
                message: e.msg.to_string(),
            })?;

            let mut matched = 0usize;
            for path in paths {
                let path = path?;
                if path.is_file() && seen.insert(path.clone()) {
                    resolved.push(path);
                }
                matched += 1;
            }
            debug!(pattern = %entry, matched, "expanded asset pattern");
        } else {
            let path = workspace.join(entry);
            if seen.insert(path.clone()) {
                resolved.push(path);
            }
        }
    }

    Ok(resolved)
}
