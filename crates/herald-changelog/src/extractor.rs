//! Version section extraction
//!
//! The scan is a single pass over the document's lines with two states.
//! While not capturing, every line is skipped until a heading whose label
//! equals the target. While capturing, body lines are collected and the next
//! heading of any label ends the scan. Everything below the second level
//! (`###` subsections, lists, blank lines) is opaque body text.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use herald_core::error::ChangelogError;

use crate::types::VersionSection;

/// Marker that introduces a version heading
pub const HEADING_MARKER: &str = "## ";

/// Result type for changelog operations
pub type Result<T> = std::result::Result<T, ChangelogError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    NotCapturing,
    Capturing,
}

/// Label of a heading line, or `None` for body lines
fn heading_label(line: &str) -> Option<&str> {
    line.strip_prefix(HEADING_MARKER).map(str::trim)
}

/// Extract the section for `target` from changelog text.
///
/// Lines are split on `\n` only, so a trailing `\r` stays part of body
/// lines. The trimmed heading label must equal `target` exactly, so
/// `v1.0` does not match `## v1.0.0` and neither does ` v1.0.0 `. When the
/// same label appears twice only the first block is returned.
pub fn extract_section(text: &str, target: &str) -> Option<VersionSection> {
    let mut state = ScanState::NotCapturing;
    let mut captured: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        match state {
            ScanState::NotCapturing => {
                if heading_label(line) == Some(target) {
                    captured.push(line);
                    state = ScanState::Capturing;
                }
            }
            ScanState::Capturing => {
                if heading_label(line).is_some() {
                    break;
                }
                captured.push(line);
            }
        }
    }

    if captured.is_empty() {
        return None;
    }

    Some(VersionSection::new(target, captured.join("\n")))
}

/// All heading labels in document order
pub fn versions(text: &str) -> Vec<String> {
    text.split('\n')
        .filter_map(heading_label)
        .map(str::to_string)
        .collect()
}

/// Extractor bound to one changelog file
#[derive(Debug, Clone)]
pub struct ChangelogParser {
    path: PathBuf,
}

impl ChangelogParser {
    /// Bind a parser to a changelog file.
    ///
    /// Fails with [`ChangelogError::FileNotFound`] if the file cannot be
    /// found; the file is not read until extraction.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(Self {
                path: path.to_path_buf(),
            }),
            _ => Err(ChangelogError::FileNotFound(path.to_path_buf())),
        }
    }

    /// Extract the section for `target`, re-reading the file on every call.
    ///
    /// A missing version is `Ok(None)`; only read failures are errors.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn extract_version(&self, target: &str) -> Result<Option<VersionSection>> {
        let text = self.read().await?;
        let section = extract_section(&text, target);

        debug!(
            found = section.is_some(),
            lines = section.as_ref().map(|s| s.content.split('\n').count()),
            "extracted changelog section"
        );
        Ok(section)
    }

    /// All version labels in the changelog
    pub async fn versions(&self) -> Result<Vec<String>> {
        let text = self.read().await?;
        Ok(versions(&text))
    }

    async fn read(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
