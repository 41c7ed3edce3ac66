//! Shared handle to an Alpha Trie.
//!
//! The trie has no fine-grained locking and insertion mutates ancestor nodes,
//! so every operation, reads included, goes through one exclusive lock.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{AlphaTrie, AlphaTrieResult};

/// A cloneable, thread-safe handle to a single [`AlphaTrie`].
#[derive(Debug, Clone, Default)]
pub struct SharedAlphaTrie {
    inner: Arc<Mutex<AlphaTrie>>,
}

impl SharedAlphaTrie {
    /// Creates a handle around a new empty trie.
    pub fn new() -> Self {
        Self::from_trie(AlphaTrie::new())
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: AlphaTrie) -> Self {
        Self {
            inner: Arc::new(Mutex::new(trie)),
        }
    }

    /// See [`AlphaTrie::insert`].
    pub fn insert(&self, word: &str) -> AlphaTrieResult<bool> {
        self.inner.lock().insert(word)
    }

    /// See [`AlphaTrie::path_depth_if_exists`].
    pub fn path_depth_if_exists(&self, word: &str) -> AlphaTrieResult<usize> {
        self.inner.lock().path_depth_if_exists(word)
    }

    /// See [`AlphaTrie::number_of_occurrences`].
    pub fn number_of_occurrences(&self, word: &str) -> AlphaTrieResult<usize> {
        self.inner.lock().number_of_occurrences(word)
    }

    /// See [`AlphaTrie::contains`].
    pub fn contains(&self, word: &str) -> AlphaTrieResult<bool> {
        self.inner.lock().contains(word)
    }

    /// See [`AlphaTrie::destroy`]. Destroys the trie for every clone of this handle.
    pub fn destroy(&self) -> usize {
        self.inner.lock().destroy()
    }

    /// Number of distinct complete words stored.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with exclusive access to the underlying trie.
    pub fn with_trie<R>(&self, f: impl FnOnce(&mut AlphaTrie) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
