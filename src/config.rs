use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "gitrelease.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE_NAME: &str = ".gitrelease.toml";

/// Represents the complete configuration for git-release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_major_heading() -> String {
    "Major changes (breaking)".to_string()
}

fn default_minor_heading() -> String {
    "Feature updates".to_string()
}

fn default_patch_heading() -> String {
    "Other commits".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Section headings used when rendering the changelog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_major_heading")]
    pub major_heading: String,

    #[serde(default = "default_minor_heading")]
    pub minor_heading: String,

    #[serde(default = "default_patch_heading")]
    pub patch_heading: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            major_heading: default_major_heading(),
            minor_heading: default_minor_heading(),
            patch_heading: default_patch_heading(),
        }
    }
}

/// Settings for the release-creation link.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Prefix put in front of the version to name the release tag
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Web URL of the repository, e.g. `https://github.com/owner/repo`
    #[serde(default)]
    pub repository_url: Option<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_prefix: default_tag_prefix(),
            repository_url: None,
        }
    }
}

/// Locate the configuration file, if any.
///
/// Order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `gitrelease.toml` in current directory
/// 3. `.gitrelease.toml` in the user config directory
pub fn find_config_file(config_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = config_path {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(ReleaseError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .filter(|path| path.exists()))
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path)?;
            parse_config(&content)
        }
        None => Ok(Config::default()),
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| ReleaseError::config(e.to_string()))
}
