//! Configuration file support for sbom-uploader.
//!
//! Provides YAML-based configuration through `sbom-uploader.config.yml`
//! files. Values from the file sit below flags and environment variables.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::UploadSettings;
use crate::shared::error::UploadError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-uploader.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub parent: Option<String>,
    pub latest: Option<bool>,
    pub tags: Option<String>,
    pub sbom: Option<PathBuf>,
    pub max_retries: Option<u32>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl From<ConfigFile> for UploadSettings {
    fn from(config: ConfigFile) -> Self {
        Self {
            url: config.url,
            api_key: config.api_key,
            name: config.name,
            version: config.version,
            parent: config.parent,
            latest: config.latest,
            tags: config.tags,
            sbom: config.sbom,
            max_retries: config.max_retries,
            timeout_secs: config.timeout_secs,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        return Err(UploadError::InvalidConfig {
            message: concat!(
                "timeout_secs must be at least 1.\n\n",
                "💡 Hint: Remove the key to leave requests without a timeout."
            )
            .to_string(),
        }
        .into());
    }

    if let Some(url) = config.url.as_deref() {
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(UploadError::InvalidConfig {
                message: format!("url must start with http:// or https:// (got '{}').", url),
            }
            .into());
        }
    }

    if config.api_key.is_some() {
        eprintln!(
            "⚠️  Warning: The config file contains an API key. Prefer SBOM_UPLOADER_API_KEY to keep secrets out of files."
        );
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
