//! Types for the compressed trie
//!
//! Nodes never hold text. Every edge label is an [`Indexes`] triple that
//! points into the caller's word array, so the trie is only meaningful
//! together with the exact word slice it was built from.

use std::fmt;

/// Index of a node in the trie arena
pub type NodeId = u32;

/// The root always lives at the first arena slot
pub const ROOT: NodeId = 0;

/// Substring reference: the bytes `words[word_index][start..end]`
///
/// The range is half-open, so an empty label (`start == end`) is a valid
/// value. Empty labels mark a word that ends exactly at a branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indexes {
    word_index: u32,
    start: u32,
    end: u32,
}

impl Indexes {
    /// Create a substring reference
    ///
    /// Panics if `start > end` or a value does not fit in 32 bits. Neither
    /// can come out of a correct build.
    pub fn new(word_index: usize, start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "malformed substring reference: word {} start {} > end {}",
            word_index,
            start,
            end
        );
        assert!(
            word_index <= u32::MAX as usize && end <= u32::MAX as usize,
            "substring reference out of range: word {} end {}",
            word_index,
            end
        );
        Self {
            word_index: word_index as u32,
            start: start as u32,
            end: end as u32,
        }
    }

    /// Index of the referenced word in the word array
    #[inline]
    pub fn word_index(&self) -> usize {
        self.word_index as usize
    }

    /// First byte offset covered by the label
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start as usize
    }

    /// One past the last byte offset covered by the label
    #[inline]
    pub fn end(&self) -> usize {
        self.end as usize
    }

    /// Inclusive last byte offset, or `None` for an empty label
    #[inline]
    pub fn end_index(&self) -> Option<usize> {
        (self.end > self.start).then(|| self.end as usize - 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolve the label against the word array
    ///
    /// Panics if the reference does not fit the word it names.
    pub fn resolve<'w, S: AsRef<str>>(&self, words: &'w [S]) -> &'w [u8] {
        let word = words[self.word_index()].as_ref().as_bytes();
        assert!(
            self.end() <= word.len(),
            "substring reference {} exceeds word of length {}",
            self,
            word.len()
        );
        &word[self.start_index()..self.end()]
    }

    /// Split into `start..start+at` and `start+at..end`
    pub(crate) fn split_at(&self, at: usize) -> (Indexes, Indexes) {
        assert!(
            at <= self.len(),
            "split offset {} beyond label {}",
            at,
            self
        );
        let mid = self.start_index() + at;
        (
            Indexes::new(self.word_index(), self.start_index(), mid),
            Indexes::new(self.word_index(), mid, self.end()),
        )
    }
}

impl fmt::Display for Indexes {
    /// Formats as `(word, start, end)` with an inclusive end, matching the
    /// usual way these triples are written down. Empty labels print `-` for
    /// the end.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_index() {
            Some(end) => write!(f, "({}, {}, {})", self.word_index, self.start, end),
            None => write!(f, "({}, {}, -)", self.word_index, self.start),
        }
    }
}

/// A node in first-child / next-sibling form
///
/// The root has no substring; every other node has one. A node with no
/// first child is a leaf and stands for exactly one word occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieNode {
    pub(crate) substr: Option<Indexes>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) sibling: Option<NodeId>,
}

impl TrieNode {
    pub(crate) fn root() -> Self {
        Self {
            substr: None,
            first_child: None,
            sibling: None,
        }
    }

    pub(crate) fn leaf(substr: Indexes) -> Self {
        Self {
            substr: Some(substr),
            first_child: None,
            sibling: None,
        }
    }

    /// Edge label from the parent, `None` only for the root
    #[inline]
    pub fn substr(&self) -> Option<&Indexes> {
        self.substr.as_ref()
    }

    #[inline]
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    #[inline]
    pub fn sibling(&self) -> Option<NodeId> {
        self.sibling
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.substr.is_none()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.substr.is_some() && self.first_child.is_none()
    }

    /// The full word a leaf stands for
    ///
    /// Internal nodes reference *some* word sharing their prefix, so this
    /// is only meaningful on leaves and returns `None` elsewhere.
    pub fn word<'w, S: AsRef<str>>(&self, words: &'w [S]) -> Option<&'w str> {
        if !self.is_leaf() {
            return None;
        }
        self.substr.map(|s| words[s.word_index()].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_inclusive_view() {
        let idx = Indexes::new(3, 1, 4);
        assert_eq!(idx.word_index(), 3);
        assert_eq!(idx.start_index(), 1);
        assert_eq!(idx.end_index(), Some(3));
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.to_string(), "(3, 1, 3)");
    }

    #[test]
    fn test_empty_label() {
        let idx = Indexes::new(0, 2, 2);
        assert!(idx.is_empty());
        assert_eq!(idx.end_index(), None);
        assert_eq!(idx.resolve(&["ab"]), b"");
        assert_eq!(idx.to_string(), "(0, 2, -)");
    }

    #[test]
    #[should_panic(expected = "malformed substring reference")]
    fn test_reversed_range_panics() {
        Indexes::new(0, 3, 2);
    }

    #[test]
    #[should_panic(expected = "exceeds word")]
    fn test_resolve_past_word_panics() {
        Indexes::new(0, 0, 5).resolve(&["abc"]);
    }

    #[test]
    fn test_split_at() {
        let (head, tail) = Indexes::new(1, 2, 6).split_at(3);
        assert_eq!(head, Indexes::new(1, 2, 5));
        assert_eq!(tail, Indexes::new(1, 5, 6));

        let (head, tail) = Indexes::new(1, 2, 6).split_at(4);
        assert_eq!(head.len(), 4);
        assert!(tail.is_empty());
    }

    #[test]
    fn test_node_roles() {
        let root = TrieNode::root();
        assert!(root.is_root());
        assert!(!root.is_leaf());

        let leaf = TrieNode::leaf(Indexes::new(1, 0, 4));
        assert!(leaf.is_leaf());
        assert_eq!(leaf.word(&["bull", "bear"]), Some("bear"));
    }
}
