//! Herald Core - Core library for release publishing
//!
//! This crate provides the error taxonomy, configuration loading, input
//! resolution and asset handling shared by the Herald crates.

pub mod assets;
pub mod config;
pub mod error;

pub use assets::{parse_asset_list, resolve_assets};
pub use config::{Config, ReleaseInputs, ReleaseSettings};
pub use error::{AssetError, ChangelogError, ConfigError, GitError, HeraldError, Result};
