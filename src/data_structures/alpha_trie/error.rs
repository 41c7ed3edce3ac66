//! Error types for the Alpha Trie.
//!
//! This module defines the error types that can occur during Alpha Trie operations.

/// Errors that can occur in Alpha Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphaTrieError {
    /// Error when an empty word is provided.
    #[error("Invalid input: empty word not allowed")]
    EmptyWord,

    /// Error when a word contains a character outside `a`..=`z`.
    #[error("Invalid input '{word}': character {found:?} at position {position} is not a lowercase ASCII letter")]
    InvalidCharacter {
        /// The rejected word.
        word: String,
        /// Character position (not byte offset) of the first offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Error when the trie is used after `destroy`.
    #[error("Trie has been destroyed")]
    Destroyed,
}

impl AlphaTrieError {
    /// Whether the error was caused by the word itself rather than the trie's state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyWord | Self::InvalidCharacter { .. })
    }
}
