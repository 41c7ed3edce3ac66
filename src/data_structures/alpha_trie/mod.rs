//! Alpha Trie Implementation
//!
//! This module provides a prefix tree over lowercase ASCII words. Every node
//! owns a fixed array of 26 child slots, so a step down the tree is a single
//! indexed access.
//!
//! # Lookup semantics
//!
//! [`AlphaTrie::path_depth_if_exists`] reports how far a word can be walked
//! from the root: `len(word) + 1` when every letter has a child link, `0` as
//! soon as one is missing. It does not check the end-of-word flag, so a
//! prefix of an inserted word also matches. Older variants of this routine
//! disagreed with each other (one bumped a per-node counter on every call,
//! one was seeded at 0 instead of 1); this one is seeded at 1 and never
//! mutates the tree. [`AlphaTrie::number_of_occurrences`] is kept as an alias
//! under the historical name, which despite its wording does not count
//! insertions. Use [`AlphaTrie::contains`] for exact membership.
//!
//! # Example
//!
//! ```
//! use lexitrie_lib::data_structures::alpha_trie::AlphaTrie;
//!
//! let mut trie = AlphaTrie::new();
//! trie.insert("note").unwrap();
//! trie.insert("no").unwrap();
//!
//! assert_eq!(trie.path_depth_if_exists("no").unwrap(), 3);
//! assert_eq!(trie.path_depth_if_exists("not").unwrap(), 4);
//! assert_eq!(trie.path_depth_if_exists("nope").unwrap(), 0);
//! assert!(!trie.contains("not").unwrap());
//!
//! trie.destroy();
//! assert!(trie.is_destroyed());
//! ```

mod error;
mod node;
mod shared;

pub use error::AlphaTrieError;
pub use node::{letter_index, ALPHABET_SIZE};
pub use shared::SharedAlphaTrie;
use node::TrieNode;

/// Result type for Alpha Trie operations
pub type AlphaTrieResult<T> = Result<T, AlphaTrieError>;

/// A prefix tree over lowercase ASCII words.
///
/// The trie owns its root node, and every node owns its children, so the
/// structure is a strict tree. Nodes are created lazily by [`insert`] and only
/// released all at once by [`destroy`] (or by dropping the trie). No
/// operation recurses per tree level, so word length is unbounded.
///
/// [`insert`]: AlphaTrie::insert
/// [`destroy`]: AlphaTrie::destroy
#[derive(Debug)]
pub struct AlphaTrie {
    /// The root node, representing the empty prefix. `None` once destroyed.
    root: Option<Box<TrieNode>>,

    /// Number of allocated nodes, not counting the root
    node_count: usize,

    /// Number of distinct complete words
    word_count: usize,
}

impl AlphaTrie {
    /// Creates a new empty `AlphaTrie`.
    pub fn new() -> Self {
        Self {
            root: Some(Box::new(TrieNode::new())),
            node_count: 0,
            word_count: 0,
        }
    }

    /// Inserts a word, creating any missing nodes along its path.
    ///
    /// The word is fully validated before the first node is allocated, so a
    /// rejected word leaves the trie untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was not previously stored as a complete word.
    /// * `Ok(false)` - The word was already present; the trie is unchanged.
    /// * `Err(AlphaTrieError)` - The word is invalid or the trie was destroyed.
    pub fn insert(&mut self, word: &str) -> AlphaTrieResult<bool> {
        self.validate(word)?;
        let root = self.root.as_deref_mut().ok_or(AlphaTrieError::Destroyed)?;

        let mut created = 0;
        let mut node = root;
        for byte in word.bytes() {
            let index = usize::from(byte - b'a');
            node = &mut **node.children[index].get_or_insert_with(|| {
                created += 1;
                Box::new(TrieNode::new())
            });
        }

        let is_new = !node.is_end_of_word;
        node.is_end_of_word = true;

        self.node_count += created;
        if is_new {
            self.word_count += 1;
        }
        Ok(is_new)
    }

    /// Walks `word` from the root and reports how far the walk got.
    ///
    /// # Returns
    ///
    /// * `Ok(len + 1)` - Every letter of the word has a child link, whether or
    ///   not the word itself was ever inserted.
    /// * `Ok(0)` - The path breaks before the word is exhausted.
    /// * `Err(AlphaTrieError)` - The word is invalid or the trie was destroyed.
    pub fn path_depth_if_exists(&self, word: &str) -> AlphaTrieResult<usize> {
        self.validate(word)?;
        let mut node = self.root()?;

        let mut depth = 1;
        for byte in word.bytes() {
            match letter_index(byte).and_then(|index| node.child(index)) {
                Some(child) => {
                    node = child;
                    depth += 1;
                }
                None => return Ok(0),
            }
        }
        Ok(depth)
    }

    /// Alias of [`path_depth_if_exists`](AlphaTrie::path_depth_if_exists).
    ///
    /// The name is historical: the value is a path depth, not the number of
    /// times the word was inserted.
    pub fn number_of_occurrences(&self, word: &str) -> AlphaTrieResult<usize> {
        self.path_depth_if_exists(word)
    }

    /// Checks whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> AlphaTrieResult<bool> {
        self.validate(word)?;
        Ok(Self::find_node(self.root()?, word)
            .is_some_and(|node| node.is_end_of_word))
    }

    /// Returns every complete word starting with `prefix`, in lexicographic order.
    ///
    /// An empty prefix yields every word in the trie.
    pub fn words_with_prefix(&self, prefix: &str) -> AlphaTrieResult<Vec<String>> {
        if !prefix.is_empty() {
            self.validate(prefix)?;
        }
        let root = self.root()?;

        let mut results = Vec::new();
        let Some(start) = Self::find_node(root, prefix) else {
            return Ok(results);
        };
        if start.is_end_of_word {
            results.push(prefix.to_string());
        }

        // Pre-order walk; each entry carries its depth below `start` and its letter
        let mut buffer = prefix.to_string();
        let mut stack = Vec::new();
        Self::push_children(&mut stack, start, 1);
        while let Some((node, depth, letter)) = stack.pop() {
            buffer.truncate(prefix.len() + depth - 1);
            buffer.push(char::from(letter));
            if node.is_end_of_word {
                results.push(buffer.clone());
            }
            Self::push_children(&mut stack, node, depth + 1);
        }
        Ok(results)
    }

    /// Releases every node and moves the trie into the destroyed state.
    ///
    /// Nodes are freed in post-order, children before their parent, with the
    /// root last. The walk uses an explicit stack so deep tries cannot
    /// overflow the call stack.
    ///
    /// # Returns
    ///
    /// The number of nodes released, root included. A second call is a no-op
    /// returning 0.
    pub fn destroy(&mut self) -> usize {
        let Some(root) = self.root.take() else {
            return 0;
        };

        let mut freed = 0;
        let mut stack = vec![root];
        while let Some(mut node) = stack.pop() {
            if node.is_leaf() {
                drop(node);
                freed += 1;
            } else {
                // Revisit the parent once its detached children are gone
                let children = node.take_children();
                stack.push(node);
                stack.extend(children);
            }
        }

        self.node_count = 0;
        self.word_count = 0;
        freed
    }

    /// Whether [`destroy`](AlphaTrie::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct complete words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of allocated nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    fn root(&self) -> AlphaTrieResult<&TrieNode> {
        self.root.as_deref().ok_or(AlphaTrieError::Destroyed)
    }

    /// Rejects anything that is not a non-empty `[a-z]+` word.
    fn validate(&self, word: &str) -> AlphaTrieResult<()> {
        if word.is_empty() {
            return Err(AlphaTrieError::EmptyWord);
        }

        if let Some((position, found)) = word
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(AlphaTrieError::InvalidCharacter {
                word: word.to_string(),
                position,
                found,
            });
        }

        Ok(())
    }

    /// Follows an already validated word from `start`.
    fn find_node<'a>(start: &'a TrieNode, word: &str) -> Option<&'a TrieNode> {
        word.bytes()
            .try_fold(start, |node, byte| node.child(letter_index(byte)?))
    }

    /// Pushes `node`'s children in reverse letter order so `a` pops first.
    fn push_children<'a>(
        stack: &mut Vec<(&'a TrieNode, usize, u8)>,
        node: &'a TrieNode,
        depth: usize,
    ) {
        for (index, child) in node.children.iter().enumerate().rev() {
            if let Some(child) = child {
                stack.push((&**child, depth, b'a' + index as u8));
            }
        }
    }
}

impl Default for AlphaTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Two tries are equal when their node structures and end-of-word flags match.
impl PartialEq for AlphaTrie {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Drop for AlphaTrie {
    fn drop(&mut self) {
        self.destroy();
    }
}
