//! Herald Changelog - changelog section extraction
//!
//! A changelog is plain text where each version starts with a second-level
//! heading of the form `## <version>`. This crate isolates the block of text
//! belonging to one version, heading included.

pub mod extractor;
pub mod types;

pub use extractor::{extract_section, versions, ChangelogParser, HEADING_MARKER};
pub use types::VersionSection;
