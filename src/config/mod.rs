//! Configuration module for Lexitrie.
//!
//! Settings are layered: built-in defaults first, then an optional file
//! (TOML, YAML, JSON), then environment variables. All configuration values
//! are validated for correctness before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod dictionary;
pub mod query;

pub use dictionary::DictionaryConfig;
pub use query::{QueryConfig, ReportFormat};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LEXITRIE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// How a caller reacts when the trie rejects a word.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWordPolicy {
    /// Log the word and carry on
    Skip,
    /// Stop at the first rejected word
    Abort,
}

/// Main configuration for Lexitrie.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LexiconConfig {
    /// Word list configuration
    pub dictionary: DictionaryConfig,

    /// Query and report configuration
    pub query: QueryConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for LexiconConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.dictionary.validate()?;
        self.query.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::invalid(
                "log",
                "level",
                format!("unknown level {other:?}, expected trace, debug, info, warn or error"),
            )),
        }
    }
}

/// Configuration loader for Lexitrie.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(LexiconConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<LexiconConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&LexiconConfig::default())
                .map_err(|e| parse_error("defaults", e))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat { path: path.clone() }),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let origin = self.origin();
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => parse_error(&origin, other),
        })?;

        let lexicon_config: LexiconConfig = config
            .try_deserialize()
            .map_err(|e| parse_error(&origin, e))?;

        lexicon_config.validate()?;

        Ok(lexicon_config)
    }

    /// Layers that can fail to parse past the defaults.
    fn origin(&self) -> String {
        match &self.config_path {
            Some(path) => format!("{} or environment", path.display()),
            None => "environment".to_string(),
        }
    }
}

fn parse_error(origin: &str, error: ExternalConfigError) -> ConfigError {
    ConfigError::ParseError {
        origin: origin.to_string(),
        message: error.to_string(),
    }
}
