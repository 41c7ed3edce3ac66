//! Data structures for Lexitrie.
//!
//! This module contains the word trie and its shared handle. The core types
//! never log or print; loading and reporting live in the `loader` and
//! `report` modules.

pub mod alpha_trie;

// Re-export common data structures
pub use alpha_trie::{AlphaTrie, AlphaTrieError, AlphaTrieResult, SharedAlphaTrie};
