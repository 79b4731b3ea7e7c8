//! Incremental trie construction
//!
//! Words are inserted one at a time in input order. Each insertion walks
//! down from the root, comparing the unmatched rest of the word against
//! edge labels, and ends in exactly one of:
//!
//! 1. No child shares a first byte: append a new leaf to the sibling chain
//! 2. A label is matched only partially: split that node and hang the new
//!    leaf next to the demoted tail
//! 3. A leaf's label is matched fully: the word extends (or repeats) an
//!    earlier word, so the leaf becomes a branch with an empty-label
//!    terminator for the old word plus the new leaf
//!
//! A full match on an internal node descends one level and repeats.
//! Only labels are ever shrunk, and no word text is copied.

use super::tree::Trie;
use super::types::*;
use tracing::{debug, trace};

/// Builder for constructing a compressed trie one word at a time
pub struct TrieBuilder {
    trie: Trie,
    /// Number of insert calls so far
    inserted: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    /// Create a builder holding an empty root
    pub fn new() -> Self {
        Self {
            trie: Trie::default(),
            inserted: 0,
        }
    }

    /// Create a builder sized for roughly `word_count` words
    ///
    /// A compressed trie over n words has at most 2n + 1 nodes.
    pub fn with_capacity(word_count: usize) -> Self {
        let mut nodes = Vec::with_capacity(2 * word_count + 1);
        nodes.push(TrieNode::root());
        Self {
            trie: Trie { nodes },
            inserted: 0,
        }
    }

    /// Number of words inserted so far
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// Read-only view of the trie built so far
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Insert `words[word_index]`
    ///
    /// `words` must be the same slice for every call. Insertion order
    /// decides the final shape, though never the completion results.
    pub fn insert<S: AsRef<str>>(&mut self, words: &[S], word_index: usize) {
        let word = words[word_index].as_ref().as_bytes();
        self.inserted += 1;

        if self.trie.is_empty() {
            let leaf = self.push(TrieNode::leaf(Indexes::new(word_index, 0, word.len())));
            self.trie.nodes[ROOT as usize].first_child = Some(leaf);
            trace!(word_index, "first word becomes the only child of the root");
            return;
        }

        let mut parent = ROOT;
        let mut matched = 0usize;

        loop {
            let rest = &word[matched..];

            let Some(id) = self.find_child(words, parent, rest) else {
                let leaf = self.push(TrieNode::leaf(Indexes::new(
                    word_index,
                    matched,
                    word.len(),
                )));
                self.append_child(parent, leaf);
                trace!(word_index, parent, matched, "appended leaf to sibling chain");
                return;
            };

            let node = *self.trie.node(id);
            let substr = node.substr.unwrap_or_else(|| {
                unreachable!("non-root node {} has no substring reference", id)
            });
            let label = substr.resolve(words);
            let common = common_prefix_len(label, rest);

            if common < label.len() {
                self.split(id, common, Indexes::new(word_index, matched + common, word.len()));
                trace!(word_index, node = id, common, "split partially matched label");
                return;
            }

            matched += label.len();

            if node.first_child.is_none() {
                self.promote_leaf(id, Indexes::new(word_index, matched, word.len()));
                trace!(word_index, node = id, "promoted leaf to branch");
                return;
            }

            parent = id;
        }
    }

    /// Finish building and hand back the trie
    pub fn finish(self) -> Trie {
        debug!(
            words = self.inserted,
            nodes = self.trie.node_count(),
            "trie built"
        );
        self.trie
    }

    fn push(&mut self, node: TrieNode) -> NodeId {
        let id = self.trie.nodes.len();
        assert!(id < NodeId::MAX as usize, "trie node arena exhausted");
        self.trie.nodes.push(node);
        id as NodeId
    }

    /// Find the child whose non-empty label starts with `rest[0]`
    ///
    /// Siblings partition by first byte, so there is at most one. Empty
    /// labels are terminators and never take part in a descent.
    fn find_child<S: AsRef<str>>(&self, words: &[S], parent: NodeId, rest: &[u8]) -> Option<NodeId> {
        let first = *rest.first()?;
        self.trie
            .children(parent)
            .find(|&id| self.trie.label(words, id).first() == Some(&first))
    }

    /// Link `child` as the last sibling under `parent`
    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let last = self.trie.children(parent).last();
        match last {
            Some(last) => self.trie.nodes[last as usize].sibling = Some(child),
            None => self.trie.nodes[parent as usize].first_child = Some(child),
        }
    }

    /// Shrink the label of `id` to its first `at` bytes
    ///
    /// The tail and the old children move down into a new node, and the
    /// leaf for `remainder` becomes that node's next sibling. The node
    /// itself is replaced in one write.
    fn split(&mut self, id: NodeId, at: usize, remainder: Indexes) {
        let old = *self.trie.node(id);
        let substr = old.substr.unwrap_or_else(|| unreachable!("cannot split the root"));
        let (head, tail) = substr.split_at(at);

        let leaf = self.push(TrieNode::leaf(remainder));
        let demoted = self.push(TrieNode {
            substr: Some(tail),
            first_child: old.first_child,
            sibling: Some(leaf),
        });

        self.trie.nodes[id as usize] = TrieNode {
            substr: Some(head),
            first_child: Some(demoted),
            sibling: old.sibling,
        };
    }

    /// Turn leaf `id` into a branch over an empty terminator for its own
    /// word and the leaf for `remainder`
    fn promote_leaf(&mut self, id: NodeId, remainder: Indexes) {
        let old = *self.trie.node(id);
        let substr = old.substr.unwrap_or_else(|| unreachable!("cannot promote the root"));
        let end = substr.end();

        let leaf = self.push(TrieNode::leaf(remainder));
        let terminator = self.push(TrieNode {
            substr: Some(Indexes::new(substr.word_index(), end, end)),
            first_child: None,
            sibling: Some(leaf),
        });

        self.trie.nodes[id as usize] = TrieNode {
            substr: Some(substr),
            first_child: Some(terminator),
            sibling: old.sibling,
        };
    }
}

/// Length of the longest common prefix of two byte strings
#[inline]
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
