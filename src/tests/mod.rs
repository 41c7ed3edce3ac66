//! Test modules for Lexitrie.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error display and reporting
//! - Dictionary loading from files on disk
//! - Property-based tests for the trie
//!
//! Shared strategies and fixtures live in `test_utils`.

pub mod config_tests;

pub use test_utils::{invalid_word_strategy, word_list_strategy, word_strategy, TestFixture};
