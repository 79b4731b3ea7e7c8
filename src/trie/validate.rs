//! Structural invariant checks
//!
//! A correct build never fails these. They exist for tests, for the fuzz
//! target, and for `patrie check` on user-supplied word lists.

use super::tree::Trie;
use super::types::*;
use anyhow::{bail, Result};

/// Verify every structural invariant of a trie built over all of `words`
///
/// Checks, in one walk from the root:
/// - the root has no label and no siblings
/// - every label fits its word, and starts where the parent's path ends
/// - every label agrees with the path text above it
/// - internal nodes have non-empty labels
/// - non-empty sibling labels differ in their first byte
/// - leaves end exactly at the end of their word
/// - each word index has exactly one leaf and every node is reachable
pub fn check_invariants<S: AsRef<str>>(trie: &Trie, words: &[S]) -> Result<()> {
    let root = trie.root();
    if !root.is_root() {
        bail!("root carries a substring reference");
    }
    if root.sibling.is_some() {
        bail!("root has a sibling");
    }

    let mut visited = vec![false; trie.node_count()];
    visited[ROOT as usize] = true;
    let mut leaf_of_word: Vec<Option<NodeId>> = vec![None; words.len()];

    // (parent, word the parent's path is spelled from, path length)
    let mut stack: Vec<(NodeId, usize, usize)> = vec![(ROOT, 0, 0)];

    while let Some((parent, path_word, offset)) = stack.pop() {
        let mut first_bytes: Vec<u8> = Vec::new();

        for id in trie.children(parent) {
            if std::mem::replace(&mut visited[id as usize], true) {
                bail!("node {} is reachable more than once", id);
            }

            let node = trie.node(id);
            let Some(substr) = node.substr else {
                bail!("non-root node {} has no substring reference", id);
            };

            let word_index = substr.word_index();
            let Some(word) = words.get(word_index) else {
                bail!("node {} references word {} of {}", id, word_index, words.len());
            };
            let word = word.as_ref().as_bytes();

            if substr.end() > word.len() {
                bail!("node {} label {} runs past its word", id, substr);
            }
            if substr.start_index() != offset {
                bail!(
                    "node {} label {} starts at {} but its path has length {}",
                    id,
                    substr,
                    substr.start_index(),
                    offset
                );
            }
            if offset > 0 && word[..offset] != words[path_word].as_ref().as_bytes()[..offset] {
                bail!("node {} word {} disagrees with the path above it", id, word_index);
            }

            if let Some(&first) = word[offset..substr.end()].first() {
                if first_bytes.contains(&first) {
                    bail!(
                        "siblings under node {} share first byte {:?}",
                        parent,
                        first as char
                    );
                }
                first_bytes.push(first);
            }

            match node.first_child {
                Some(_) => {
                    if substr.is_empty() {
                        bail!("internal node {} has an empty label", id);
                    }
                    stack.push((id, word_index, substr.end()));
                }
                None => {
                    if substr.end() != word.len() {
                        bail!("leaf {} label {} stops short of its word", id, substr);
                    }
                    if let Some(other) = leaf_of_word[word_index].replace(id) {
                        bail!("word {} has two leaves ({} and {})", word_index, other, id);
                    }
                }
            }
        }
    }

    if let Some(missing) = leaf_of_word.iter().position(Option::is_none) {
        bail!("word {} has no leaf", missing);
    }
    if let Some(orphan) = visited.iter().position(|&seen| !seen) {
        bail!("node {} is not reachable from the root", orphan);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_tries_pass() {
        let lists: [&[&str]; 6] = [
            &[],
            &["bear", "bull", "stock", "bell"],
            &["a", "ab", "abc"],
            &["abc", "ab", "a"],
            &["same", "same", "sam", ""],
            &["", ""],
        ];
        for words in lists {
            let trie = Trie::build(words);
            check_invariants(&trie, words).unwrap();
        }
    }

    #[test]
    fn test_detects_shared_first_byte() {
        let words = ["bear", "bull"];
        let mut trie = Trie::build(&words);
        // Rewire into two top-level siblings both starting with 'b'
        trie.nodes.truncate(1);
        trie.nodes.push(TrieNode::leaf(Indexes::new(0, 0, 4)));
        trie.nodes.push(TrieNode::leaf(Indexes::new(1, 0, 4)));
        trie.nodes[0].first_child = Some(1);
        trie.nodes[1].sibling = Some(2);

        let err = check_invariants(&trie, &words).unwrap_err();
        assert!(err.to_string().contains("share first byte"));
    }

    #[test]
    fn test_detects_gap_in_offsets() {
        let words = ["bear", "bull"];
        let mut trie = Trie::build(&words);
        let b = trie.root().first_child().unwrap();
        let ear = trie.node(b).first_child().unwrap();
        trie.nodes[ear as usize].substr = Some(Indexes::new(0, 2, 4));

        let err = check_invariants(&trie, &words).unwrap_err();
        assert!(err.to_string().contains("starts at 2"));
    }

    #[test]
    fn test_detects_short_leaf() {
        let words = ["bear"];
        let mut trie = Trie::build(&words);
        let leaf = trie.root().first_child().unwrap();
        trie.nodes[leaf as usize].substr = Some(Indexes::new(0, 0, 3));

        let err = check_invariants(&trie, &words).unwrap_err();
        assert!(err.to_string().contains("stops short"));
    }

    #[test]
    fn test_detects_missing_word() {
        let words = ["bear", "bull"];
        let trie = Trie::build(&words[..1]);

        let err = check_invariants(&trie, &words).unwrap_err();
        assert!(err.to_string().contains("word 1 has no leaf"));
    }
}
