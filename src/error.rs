//! Error types for robots-guard
//!
//! Queries against a built [`Guard`](crate::Guard) never fail: unknown agents and
//! unmatched paths resolve to permissive defaults. Errors only arise while loading a
//! configuration or compiling its patterns.

use thiserror::Error;

/// Top-level library error
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pattern compilation errors
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid path pattern '{pattern}': {reason}")]
    Invalid { pattern: String, reason: String },
}

impl PatternError {
    pub fn invalid(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        PatternError::Invalid {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_message() {
        let err = PatternError::invalid("/a*b", "size limit exceeded");
        assert_eq!(
            err.to_string(),
            "Invalid path pattern '/a*b': size limit exceeded"
        );
    }

    #[test]
    fn test_guard_error_from_config() {
        let err: GuardError = ConfigError::Load("missing file".into()).into();
        assert!(matches!(err, GuardError::Config(ConfigError::Load(_))));
        assert!(err.to_string().contains("missing file"));
    }
}
