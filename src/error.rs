//! Error types for the spacey-steps binary.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command line front-end.
#[derive(Error, Debug)]
pub enum CliError {
    /// Parse or flattening failure from the analyzer
    #[error(transparent)]
    Analysis(#[from] spacey_analyzer::Error),

    /// A configuration file failed to parse
    #[error("ConfigError: {path}: {message}")]
    ConfigFile { path: String, message: String },

    /// A configuration key or value was rejected
    #[error("ConfigError: {key}: {message}")]
    ConfigValue { key: String, message: String },

    /// IO error
    #[error("IOError: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSONError: {0}")]
    Json(#[from] serde_json::Error),

    /// Line editor failure
    #[error("ReplError: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl CliError {
    pub fn config_value(key: &str, message: impl Into<String>) -> Self {
        CliError::ConfigValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
