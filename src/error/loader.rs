//! Loader error module.
//!
//! This module defines error types that may occur while reading a word list.
//! None of them come from the trie itself.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading words.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Error when the word list cannot be opened.
    #[error("Word source unavailable: {path}: {source}")]
    SourceUnavailable {
        /// Path of the word list
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error when a line cannot be read (IO failure or invalid UTF-8).
    #[error("Failed to read line {line}: {source}")]
    ReadFailed {
        /// 1-based line number
        line: usize,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error when a line is longer than the loader accepts.
    #[error("Word on line {line} has {length} characters, limit is {max_length}")]
    WordTooLong {
        /// 1-based line number
        line: usize,
        /// Length of the line in characters
        length: usize,
        /// The configured limit
        max_length: usize,
    },

    /// Error when the word list holds more words than allowed.
    #[error("Resource exhausted: word list exceeds {max_words} words")]
    ResourceExhausted {
        /// The configured limit
        max_words: usize,
    },
}
