//! GitHub release API integration for Herald
//!
//! This crate talks to the hosting platform: it creates the tag reference,
//! the release record, and uploads release assets.
//!
//! ## Usage
//!
//! ```ignore
//! use herald_github::{GitHubClient, GitHubConfig, NewRelease, ReleaseHost};
//!
//! let client = GitHubClient::new(GitHubConfig::new("owner/repo", token)?)?;
//! client.create_tag_ref("v1.0.0", &sha).await?;
//! let release = client.create_release(&NewRelease::new("v1.0.0", body)).await?;
//! client.upload_asset(&release, &path).await?;
//! ```

pub mod client;
pub mod content_type;
pub mod error;
pub mod traits;
pub mod types;

pub use client::{GitHubClient, GitHubConfig};
pub use content_type::content_type_for;
pub use error::GitHubError;
pub use traits::ReleaseHost;
pub use types::{Asset, NewRelease, Release, Repository};
