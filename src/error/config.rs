//! Configuration error module.
//!
//! Errors raised while assembling a [`LexiconConfig`](crate::config::LexiconConfig)
//! from defaults, a settings file and the environment. Validation failures
//! name the section and key that were rejected.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the settings file named on the command line does not exist.
    #[error("Settings file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the settings file extension maps to no known format.
    #[error("Unsupported settings file {path}: expected .toml, .json, .yaml or .yml")]
    UnsupportedFormat {
        /// The rejected file
        path: PathBuf,
    },

    /// Error when a layer cannot be parsed or merged.
    #[error("Failed to parse settings from {origin}: {message}")]
    ParseError {
        /// Which layer failed: a file path, `defaults` or `environment`
        origin: String,
        /// Message from the parser
        message: String,
    },

    /// Error when a merged value is rejected by validation.
    #[error("Invalid [{section}] {key}: {message}")]
    InvalidValue {
        /// Settings section, e.g. `dictionary`
        section: &'static str,
        /// Key within the section
        key: &'static str,
        /// Why the value was rejected
        message: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`].
    pub fn invalid(section: &'static str, key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            section,
            key,
            message: message.into(),
        }
    }
}
