//! Default configuration values

/// Default changelog document
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default release name template
pub const DEFAULT_NAME_TEMPLATE: &str = "{version}";

/// Default transient release-notes file
pub const DEFAULT_NOTES_FILE: &str = "CHANGELOG_temp.md";

/// Default GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "herald.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "herald.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".herald.toml",
        ".herald.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Herald configuration

[changelog]
file = "CHANGELOG.md"

[release]
name_template = "{version}"
draft = false
# prerelease = false   # unset: detected from the version
notes_file = "CHANGELOG_temp.md"

# assets = ["dist/*.zip", "target/release/app.tar.gz"]

[github]
api_url = "https://api.github.com"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Config;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.changelog.file.to_str(), Some(DEFAULT_CHANGELOG_FILE));
        assert_eq!(config.release.name_template, DEFAULT_NAME_TEMPLATE);
        assert_eq!(config.github.api_url, DEFAULT_API_URL);
    }
}
