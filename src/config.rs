use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::changelog::DEFAULT_CHANGELOG;
use crate::domain::ArchiveSpec;
use crate::error::{ReleaseError, Result};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "changelog-release.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".changelog-release.toml";

/// Represents the complete configuration for changelog-release.
///
/// Contains the changelog location, the git remote to push to, and the release
/// archive and attachment settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_changelog_path() -> String {
    DEFAULT_CHANGELOG.to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Where the changelog lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
        }
    }
}

/// Git settings for tag publishing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
        }
    }
}

/// Hosted release settings.
///
/// An empty `archive_source_directory` disables archiving. When
/// `attachment_paths` is not set, the archive output (if any) is attached.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub archive_source_directory: String,

    #[serde(default)]
    pub attachment_paths: Option<Vec<String>>,
}

impl ReleaseConfig {
    /// The archive to build before releasing, if one is configured
    pub fn archive_spec(&self) -> Option<ArchiveSpec> {
        ArchiveSpec::for_directory(&self.archive_source_directory)
    }

    /// Files passed to `gh release create`, in order
    pub fn attachments(&self) -> Vec<String> {
        match &self.attachment_paths {
            Some(paths) => paths.clone(),
            None => self
                .archive_spec()
                .map(|spec| vec![spec.output_filename.to_string_lossy().into_owned()])
                .unwrap_or_default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog-release.toml` in current directory
/// 3. `.changelog-release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed, or if an explicit
///   path cannot be read
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE);
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| ReleaseError::config(format!("cannot read '{}': {}", path, e)))?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}
