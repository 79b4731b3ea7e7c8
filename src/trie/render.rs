//! Indented debug dump of a trie
//!
//! Each node prints the full path text up to and including its label,
//! followed by its `(word, start, end)` reference:
//!
//! ```text
//! root
//!     b (0, 0, 0)
//!         be (0, 1, 1)
//!             bear (0, 2, 3)
//! ```

use super::tree::Trie;
use super::types::*;
use std::fmt::Write;

/// One line of the dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'w> {
    /// Edges from the root; the root itself is depth 0
    pub depth: usize,
    /// Path text through the end of this node's label
    pub path: &'w str,
    /// `None` for the root
    pub substr: Option<Indexes>,
}

/// Pre-order listing of every node, children left to right
pub fn tree_lines<'w, S: AsRef<str>>(trie: &Trie, words: &'w [S]) -> Vec<TreeLine<'w>> {
    let mut lines = Vec::with_capacity(trie.node_count());
    let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

    while let Some((id, depth)) = stack.pop() {
        let node = trie.node(id);
        let path = match node.substr() {
            // Labels always end on a char boundary for lowercase input; fall
            // back to an empty path rather than panic on odd bytes
            Some(substr) => words[substr.word_index()]
                .as_ref()
                .get(..substr.end())
                .unwrap_or(""),
            None => "",
        };
        lines.push(TreeLine {
            depth,
            path,
            substr: node.substr().copied(),
        });

        let start = stack.len();
        stack.extend(trie.children(id).map(|child| (child, depth + 1)));
        stack[start..].reverse();
    }

    lines
}

/// Render the whole trie as an indented string
pub fn render_tree<S: AsRef<str>>(trie: &Trie, words: &[S]) -> String {
    let mut out = String::new();
    for line in tree_lines(trie, words) {
        let indent = "    ".repeat(line.depth);
        // Writing to a String cannot fail
        let _ = match line.substr {
            Some(substr) => writeln!(out, "{}{} {}", indent, line.path, substr),
            None => writeln!(out, "{}root", indent),
        };
    }
    out
}
