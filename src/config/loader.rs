//! Configuration loader
//!
//! Reads a [`GuardConfig`] from a TOML or JSON document. The shape is not validated
//! beyond deserialization: odd entries are tolerated and resolved permissively when
//! the guard is built.

use crate::config::types::{ConfigFormat, GuardConfig};
use crate::error::ConfigError;
use config::{Config, File, FileFormat};
use std::path::Path;
use tracing::{debug, warn};

/// Load configuration from a string (useful for testing)
pub fn load_config_from_str(
    source: &str,
    format: ConfigFormat,
) -> Result<GuardConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(source, FileFormat::from(format)))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let guard_config: GuardConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    report_config(&guard_config);

    Ok(guard_config)
}

/// Load configuration from a file, choosing the format from its extension
pub fn load_config(path: impl AsRef<Path>) -> Result<GuardConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::Load(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let format = ConfigFormat::from_extension(path.extension().and_then(|e| e.to_str()));
    let source = std::fs::read_to_string(path)?;

    debug!(path = %path.display(), ?format, "Loading configuration");
    load_config_from_str(&source, format)
}

fn report_config(config: &GuardConfig) {
    for (index, group) in config.groups.iter().enumerate() {
        if group.agents.is_empty() {
            warn!(group = index, "Group declares no agents and will never match");
        }
    }
    debug!(groups = config.groups.len(), "Configuration loaded");
}
