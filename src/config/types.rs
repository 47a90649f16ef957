//! Configuration types for robots-guard
//!
//! These mirror the structure produced by a robots.txt parser: groups of agent names,
//! each with an ordered list of directives. Missing keys deserialize as empty.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Rule groups in source order
    pub groups: Vec<ConfigGroup>,
}

/// One source-level group of agents sharing a directive list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigGroup {
    /// Agent names this group applies to (`*` for every crawler)
    pub agents: Vec<String>,

    /// Directives in source order
    pub rules: Vec<ConfigGroupRule>,
}

/// A single directive line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigGroupRule {
    /// Directive name: `allow`, `disallow` or `noindex`, in any case
    pub rule: String,

    /// Path scope of the directive
    pub path: String,
}

impl ConfigGroup {
    pub fn new(agents: &[&str], rules: Vec<ConfigGroupRule>) -> Self {
        Self {
            agents: agents.iter().map(|a| a.to_string()).collect(),
            rules,
        }
    }
}

impl ConfigGroupRule {
    pub fn new(rule: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            path: path.into(),
        }
    }

    pub fn allow(path: impl Into<String>) -> Self {
        Self::new("allow", path)
    }

    pub fn disallow(path: impl Into<String>) -> Self {
        Self::new("disallow", path)
    }

    pub fn noindex(path: impl Into<String>) -> Self {
        Self::new("noindex", path)
    }
}

/// Source format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file extension, defaulting to TOML
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

impl From<ConfigFormat> for config::FileFormat {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Toml => config::FileFormat::Toml,
            ConfigFormat::Json => config::FileFormat::Json,
        }
    }
}
