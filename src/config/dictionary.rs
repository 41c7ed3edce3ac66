//! Dictionary configuration module.
//!
//! This module defines where the word list comes from and how the loader
//! treats blank lines, duplicates and words the trie rejects.

use super::{ConfigResult, InvalidWordPolicy, Validate};
use crate::error::config::ConfigError;
use crate::loader::{LoaderOptions, DEFAULT_MAX_WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to the word list, one word per line
    pub path: PathBuf,

    /// Whether empty lines are ignored instead of handed to the trie
    pub skip_blank_lines: bool,

    /// Whether repeated words are dropped before insertion
    pub deduplicate: bool,

    /// Maximum number of words accepted from the list
    pub max_words: usize,

    /// Longest dictionary line the loader accepts, in characters
    pub max_word_length: usize,

    /// What to do with words the trie rejects
    pub on_invalid: InvalidWordPolicy,

    /// Whether to print every loaded word before the report
    pub echo_words: bool,
}

impl DictionaryConfig {
    /// Loader options derived from this section.
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            skip_blank_lines: self.skip_blank_lines,
            deduplicate: self.deduplicate,
            max_words: self.max_words,
            max_word_length: self.max_word_length,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dictionary.txt"),
            skip_blank_lines: true,
            deduplicate: false,
            max_words: 1_000_000,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            on_invalid: InvalidWordPolicy::Abort,
            echo_words: false,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("dictionary", "path", "cannot be empty"));
        }

        if self.max_words == 0 {
            return Err(ConfigError::invalid(
                "dictionary",
                "max_words",
                "must be greater than 0",
            ));
        }

        if self.max_word_length == 0 {
            return Err(ConfigError::invalid(
                "dictionary",
                "max_word_length",
                "must be greater than 0",
            ));
        }

        Ok(())
    }
}
