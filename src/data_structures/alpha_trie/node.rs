//! Node implementation for the Alpha Trie.
//!
//! A node never stores the letter that leads to it; that letter is implied by
//! the slot it occupies in its parent's `children` array.

/// Number of child slots per node, one per lowercase ASCII letter.
pub const ALPHABET_SIZE: usize = 26;

/// Maps a byte to its child slot, or `None` if it is not in `a`..=`z`.
#[inline]
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_lowercase() {
        Some(usize::from(byte - b'a'))
    } else {
        None
    }
}

/// A node in the Alpha Trie.
#[derive(Default)]
pub struct TrieNode {
    /// Whether a complete word ends at this node
    pub is_end_of_word: bool,

    /// Owned children indexed by `letter - 'a'`
    pub children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
    /// Creates a node with no children that does not end a word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child at `index`, if one has been created.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&TrieNode> {
        self.children[index].as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Detaches and returns every child, leaving all slots empty.
    pub fn take_children(&mut self) -> Vec<Box<TrieNode>> {
        self.children.iter_mut().filter_map(Option::take).collect()
    }
}

/// Structural equality: same child slots filled and same end-of-word flags,
/// compared with an explicit stack rather than per-level recursion.
impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.is_end_of_word != right.is_end_of_word {
                return false;
            }
            for (l, r) in left.children.iter().zip(right.children.iter()) {
                match (l, r) {
                    (Some(l), Some(r)) => stack.push((&**l, &**r)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TrieNode {}

// Shallow on purpose: a derived impl would descend once per level.
impl std::fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filled = self.children.iter().filter(|c| c.is_some()).count();
        f.debug_struct("TrieNode")
            .field("is_end_of_word", &self.is_end_of_word)
            .field("children", &filled)
            .finish()
    }
}
