//! Git types

use serde::{Deserialize, Serialize};

/// Information about a git tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// Commit hash the tag points to
    pub commit_hash: String,
}

impl TagInfo {
    /// Create a new TagInfo
    pub fn new(name: impl Into<String>, commit_hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit_hash: commit_hash.into(),
        }
    }

    /// Whether the tag points at the given commit
    pub fn points_at(&self, sha: &str) -> bool {
        self.commit_hash.eq_ignore_ascii_case(sha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_at() {
        let tag = TagInfo::new("v1.0.0", "abc123");
        assert!(tag.points_at("abc123"));
        assert!(tag.points_at("ABC123"));
        assert!(!tag.points_at("def456"));
    }
}
