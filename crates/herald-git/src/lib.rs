//! Herald Git - local repository access for release publishing
//!
//! Resolves the commit a release tag should point at and inspects existing
//! tags in the working repository.

mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::TagInfo;
