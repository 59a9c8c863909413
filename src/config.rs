use crate::bump::BumpRequest;
use crate::domain::ReleaseType;
use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "versionbump.toml";

/// Represents the complete configuration for version-bump.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub hook: HookConfig,
}

fn default_release_type() -> String {
    "patch".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Inputs of a single bump operation.
///
/// Empty strings mean "not set" for `prerelease` and `fallback_version`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    #[serde(default = "default_release_type")]
    pub release_type: String,

    #[serde(default)]
    pub prerelease: String,

    #[serde(default)]
    pub fallback_version: String,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            release_type: default_release_type(),
            prerelease: String::new(),
            fallback_version: String::new(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

impl BumpConfig {
    /// Build the request for the version bumper
    pub fn to_request(&self) -> BumpRequest {
        BumpRequest::new(ReleaseType::from_input(&self.release_type))
            .with_prerelease_channel(self.prerelease.as_str())
            .with_fallback_version(self.fallback_version.as_str())
    }
}

/// Optional script consulted before the version is finalized.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct HookConfig {
    #[serde(default)]
    pub command: Option<PathBuf>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionbump.toml` in current directory
/// 3. `.versionbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(BumpError::Config)` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(path) = dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
    {
        path
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| BumpError::config(format!("Invalid {}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}
