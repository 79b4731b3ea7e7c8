//! Prefix completion over a built trie
//!
//! The walk scans one sibling chain at a time. For each node it decides
//! whether to descend (the label is a strict prefix of what is left of the
//! query), collect the whole subtree (what is left of the query ends
//! inside or at the end of the label), or move on to the next sibling.

use super::tree::Trie;
use super::types::*;
use rayon::prelude::*;
use tracing::trace;

/// What one node means for the rest of the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Label consumed, query continues below
    Descend,
    /// Query ends within this label
    Collect,
    /// Diverges from the query
    Skip,
}

#[inline]
fn step(label: &[u8], rest: &[u8]) -> Step {
    if label.starts_with(rest) {
        Step::Collect
    } else if rest.starts_with(label) {
        Step::Descend
    } else {
        Step::Skip
    }
}

impl Trie {
    /// Every leaf whose word starts with `prefix`
    ///
    /// Returns `None` when nothing matches, including on an empty trie.
    /// `Some` always holds at least one leaf. Order follows the sibling
    /// chains left to right and carries no other meaning.
    pub fn complete<S: AsRef<str>>(&self, words: &[S], prefix: &str) -> Option<Vec<&TrieNode>> {
        let ids = self.complete_ids(words, prefix);
        if ids.is_empty() {
            return None;
        }
        Some(ids.into_iter().map(|id| self.node(id)).collect())
    }

    /// Like [`Trie::complete`], mapped back to the matching words
    pub fn complete_words<'w, S: AsRef<str>>(
        &self,
        words: &'w [S],
        prefix: &str,
    ) -> Option<Vec<&'w str>> {
        self.complete(words, prefix).map(|leaves| {
            leaves
                .into_iter()
                .filter_map(|leaf| leaf.word(words))
                .collect()
        })
    }

    /// Run several completions concurrently
    ///
    /// The trie is only read, so any number of queries can share it. Results
    /// line up with `prefixes`.
    pub fn complete_batch<S, P>(&self, words: &[S], prefixes: &[P]) -> Vec<Option<Vec<&TrieNode>>>
    where
        S: AsRef<str> + Sync,
        P: AsRef<str> + Sync,
    {
        prefixes
            .par_iter()
            .map(|prefix| self.complete(words, prefix.as_ref()))
            .collect()
    }

    /// Ids of every matching leaf, empty if there are none
    pub fn complete_ids<S: AsRef<str>>(&self, words: &[S], prefix: &str) -> Vec<NodeId> {
        let prefix = prefix.as_bytes();
        let mut leaves = Vec::new();
        let mut consumed = 0usize;
        let mut current = self.root().first_child;

        while let Some(id) = current {
            let node = self.node(id);
            let rest = &prefix[consumed..];
            let label = self.label(words, id);

            match step(label, rest) {
                Step::Collect => {
                    trace!(node = id, consumed, "prefix ends in label, collecting subtree");
                    self.collect_leaves(id, &mut leaves);
                    // Only an empty rest can match more than one sibling
                    current = node.sibling;
                }
                Step::Descend if node.first_child.is_some() => {
                    consumed += label.len();
                    current = node.first_child;
                }
                // A leaf whose word is shorter than the prefix is a dead end
                Step::Descend | Step::Skip => current = node.sibling,
            }
        }

        leaves
    }
}

/// Every leaf in `trie` whose word starts with `prefix`, or `None`
pub fn completion_list<'t, S: AsRef<str>>(
    trie: &'t Trie,
    words: &[S],
    prefix: &str,
) -> Option<Vec<&'t TrieNode>> {
    trie.complete(words, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 4] = ["bear", "bull", "stock", "bell"];

    fn sorted(mut found: Vec<&str>) -> Vec<&str> {
        found.sort_unstable();
        found
    }

    #[test]
    fn test_step() {
        assert_eq!(step(b"bear", b"be"), Step::Collect);
        assert_eq!(step(b"bear", b"bear"), Step::Collect);
        assert_eq!(step(b"bear", b""), Step::Collect);
        assert_eq!(step(b"b", b"be"), Step::Descend);
        assert_eq!(step(b"bear", b"bu"), Step::Skip);
        assert_eq!(step(b"", b"x"), Step::Descend);
    }

    #[test]
    fn test_scenario_completions() {
        let trie = Trie::build(&WORDS);

        assert_eq!(
            sorted(trie.complete_words(&WORDS, "b").unwrap()),
            vec!["bear", "bell", "bull"]
        );
        assert_eq!(
            sorted(trie.complete_words(&WORDS, "be").unwrap()),
            vec!["bear", "bell"]
        );
        assert_eq!(trie.complete_words(&WORDS, "bell").unwrap(), vec!["bell"]);
        assert!(trie.complete(&WORDS, "z").is_none());
    }

    #[test]
    fn test_prefix_ending_mid_label() {
        let trie = Trie::build(&WORDS);
        assert_eq!(trie.complete_words(&WORDS, "st").unwrap(), vec!["stock"]);
        assert_eq!(trie.complete_words(&WORDS, "bul").unwrap(), vec!["bull"]);
    }

    #[test]
    fn test_prefix_longer_than_word() {
        let trie = Trie::build(&WORDS);
        assert!(trie.complete(&WORDS, "bears").is_none());
        assert!(trie.complete(&WORDS, "stockade").is_none());
    }

    #[test]
    fn test_diverging_inside_label() {
        let trie = Trie::build(&WORDS);
        assert!(trie.complete(&WORDS, "stuck").is_none());
        assert!(trie.complete(&WORDS, "bex").is_none());
    }

    #[test]
    fn test_empty_prefix_matches_all() {
        let trie = Trie::build(&WORDS);
        assert_eq!(
            sorted(trie.complete_words(&WORDS, "").unwrap()),
            vec!["bear", "bell", "bull", "stock"]
        );
    }

    #[test]
    fn test_empty_trie_is_no_match() {
        let words: Vec<String> = Vec::new();
        let trie = Trie::build(&words);
        assert!(trie.complete(&words, "").is_none());
        assert!(trie.complete(&words, "a").is_none());
    }

    #[test]
    fn test_prefix_chain() {
        let words = ["a", "ab", "abc"];
        let trie = Trie::build(&words);

        assert_eq!(sorted(trie.complete_words(&words, "a").unwrap()), vec!["a", "ab", "abc"]);
        assert_eq!(sorted(trie.complete_words(&words, "ab").unwrap()), vec!["ab", "abc"]);
        assert_eq!(trie.complete_words(&words, "abc").unwrap(), vec!["abc"]);
        assert!(trie.complete(&words, "abcd").is_none());
    }

    #[test]
    fn test_returned_nodes_are_leaves() {
        let trie = Trie::build(&WORDS);
        for leaf in trie.complete(&WORDS, "b").unwrap() {
            assert!(leaf.is_leaf());
        }
    }

    #[test]
    fn test_batch_matches_sequential() {
        let trie = Trie::build(&WORDS);
        let prefixes = ["b", "be", "z", "", "stock"];

        let batch = trie.complete_batch(&WORDS, &prefixes);
        assert_eq!(batch.len(), prefixes.len());
        for (prefix, result) in prefixes.iter().zip(batch) {
            assert_eq!(result, trie.complete(&WORDS, prefix));
        }
    }

    #[test]
    fn test_completion_list_free_function() {
        let trie = Trie::build(&WORDS);
        let leaves = completion_list(&trie, &WORDS, "s").unwrap();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].substr().unwrap().word_index(), 2);
    }
}
