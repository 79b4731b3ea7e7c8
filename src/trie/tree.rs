//! The trie arena and read-only navigation
//!
//! Nodes are stored in a flat `Vec` and addressed by [`NodeId`]. A parent
//! owns its first child, and every node owns its next sibling, so the
//! links always form a tree. Nothing here mutates; mutation lives in the
//! builder.

use super::builder::TrieBuilder;
use super::types::*;

/// A built compressed trie
///
/// Holds no text. Every query must be given the same word slice that the
/// trie was built from.
#[derive(Debug, Clone)]
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
        }
    }
}

impl Trie {
    /// Build a trie by inserting every word in order, first to last
    pub fn build<S: AsRef<str>>(words: &[S]) -> Self {
        let mut builder = TrieBuilder::with_capacity(words.len());
        for word_index in 0..words.len() {
            builder.insert(words, word_index);
        }
        builder.finish()
    }

    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT as usize]
    }

    /// Get a node by id
    ///
    /// Panics if the id did not come from this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id as usize]
    }

    /// True if no word has been inserted
    pub fn is_empty(&self) -> bool {
        self.root().first_child.is_none()
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves, which equals the number of inserted words
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            trie: self,
            next: self.node(id).first_child,
        }
    }

    /// Edge label bytes of a node (empty for the root)
    pub fn label<'w, S: AsRef<str>>(&self, words: &'w [S], id: NodeId) -> &'w [u8] {
        match self.node(id).substr {
            Some(substr) => substr.resolve(words),
            None => &[],
        }
    }

    /// Collect every leaf in the subtree rooted at `id`
    ///
    /// A leaf passed in is returned by itself. Uses an explicit stack, so
    /// depth is bounded only by memory.
    pub fn leaves_under(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        self.collect_leaves(id, &mut leaves);
        leaves
    }

    pub(crate) fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if self.node(id).is_leaf() {
            out.push(id);
            return;
        }

        let mut stack: Vec<NodeId> = self.children(id).collect();
        // Pop order is reversed; flip so leaves come out left to right
        stack.reverse();

        while let Some(current) = stack.pop() {
            let node = self.node(current);
            if node.first_child.is_none() {
                out.push(current);
                continue;
            }
            let start = stack.len();
            stack.extend(self.children(current));
            stack[start..].reverse();
        }
    }
}

/// Iterator over a sibling chain
pub struct Children<'t> {
    trie: &'t Trie,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.trie.node(current).sibling;
        Some(current)
    }
}

/// Build a trie from the word list, inserting in input order
pub fn build_trie<S: AsRef<str>>(words: &[S]) -> Trie {
    Trie::build(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trie() {
        let words: [&str; 0] = [];
        let trie = Trie::build(&words);

        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.leaf_count(), 0);
        assert!(trie.root().is_root());
        assert!(trie.leaves_under(ROOT).is_empty());
    }

    #[test]
    fn test_children_iterates_sibling_chain() {
        let words = ["bear", "stock", "zebra"];
        let trie = Trie::build(&words);

        let labels: Vec<&[u8]> = trie
            .children(ROOT)
            .map(|id| trie.label(&words, id))
            .collect();
        assert_eq!(labels, vec!["bear".as_bytes(), "stock".as_bytes(), "zebra".as_bytes()]);
    }

    #[test]
    fn test_leaves_under_left_to_right() {
        let words = ["bear", "bull", "bell", "stock"];
        let trie = Trie::build(&words);

        let found: Vec<&str> = trie
            .leaves_under(ROOT)
            .into_iter()
            .filter_map(|id| trie.node(id).word(&words))
            .collect();
        assert_eq!(found, vec!["bear", "bell", "bull", "stock"]);
    }

    #[test]
    fn test_leaves_under_leaf_is_itself() {
        let words = ["solo"];
        let trie = Trie::build(&words);
        let leaf = trie.root().first_child().unwrap();

        assert_eq!(trie.leaves_under(leaf), vec![leaf]);
    }
}
