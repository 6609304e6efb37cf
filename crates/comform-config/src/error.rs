//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
///
/// All of these are fatal: they are reported before any checking begins and
/// no partial report is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No rule file found.
    #[error("no rule file found: {0}")]
    NotFound(std::path::PathBuf),

    /// Both recognized filename variants exist at the same root.
    #[error("found both '{0}' and '{1}'; remove one or pass a rule file explicitly")]
    Ambiguous(String, String),

    /// Invalid YAML syntax or schema mismatch.
    #[error("invalid rule file: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Invalid rule set value.
    #[error("invalid rule set: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
