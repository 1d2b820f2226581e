//! Changelog types

use serde::{Deserialize, Serialize};

/// The block of a changelog belonging to one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSection {
    /// The version label that was requested
    pub version: String,
    /// Heading line plus body lines, newline-joined
    pub content: String,
}

impl VersionSection {
    /// Create a new section
    pub fn new(version: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            content: content.into(),
        }
    }

    /// Content without the heading line
    pub fn body(&self) -> &str {
        match self.content.split_once('\n') {
            Some((_, body)) => body,
            None => "",
        }
    }
}
