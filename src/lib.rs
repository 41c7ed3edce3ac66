//! Lexitrie Library
//!
//! An in-memory prefix tree over lowercase ASCII words, plus the pieces
//! around it: a dictionary loader, a query reporter and a layered
//! configuration. The binary crate wires them together.
//!
//! # Architecture
//!
//! - [`data_structures::alpha_trie`]: the trie core. No I/O, no logging.
//! - [`loader`]: word list parsing and bulk insertion.
//! - [`report`]: lookups for a list of query words and their rendering.
//! - [`session`]: one full load, query and teardown run.
//! - [`config`] and [`error`]: ambient configuration and error types.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod report;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lexitrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
