//! Configuration file support for rfq-approve.
//!
//! Provides YAML-based configuration through `rfq-approve.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "rfq-approve.config.yml";

/// Fallback portal address when neither the CLI nor the config file
/// provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Request timeout applied when the config file does not set one.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub username: Option<String>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
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
    if let Some(ref url) = config.api_base_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(
                "Invalid config: api_base_url must start with http:// or https://.\n\n\
                 💡 Hint: Use the portal address, e.g. \"https://portal.example.com\".",
            );
        }
    }
    if config.timeout_seconds == Some(0) {
        bail!(
            "Invalid config: timeout_seconds must be at least 1.\n\n\
             💡 Hint: Omit the field to use the default of {} seconds.",
            DEFAULT_TIMEOUT_SECONDS
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
