//! Query configuration module.
//!
//! This module defines the words looked up after loading and how the
//! resulting report is rendered.

use super::{ConfigResult, InvalidWordPolicy, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Output format of the query report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One tab-indented `word : count` line per query
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Words to look up, in report order
    pub words: Vec<String>,

    /// Report output format
    pub format: ReportFormat,

    /// What to do with query words the trie rejects
    pub on_invalid: InvalidWordPolicy,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            words: ["notaword", "ucf", "no", "note", "corg"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            format: ReportFormat::default(),
            on_invalid: InvalidWordPolicy::Skip,
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.words.is_empty() {
            return Err(ConfigError::invalid(
                "query",
                "words",
                "at least one query word is required",
            ));
        }

        Ok(())
    }
}
