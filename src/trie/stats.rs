use super::tree::Trie;
use super::types::*;
use serde::{Deserialize, Serialize};

/// Shape statistics for a built trie
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Words in the list the trie was built from
    pub word_count: usize,
    /// All nodes, root included
    pub node_count: usize,
    /// Non-root nodes with children
    pub internal_count: usize,
    pub leaf_count: usize,
    /// Leaves with an empty label (word ends at a branch point)
    pub terminator_count: usize,
    /// Longest root-to-leaf path in edges
    pub max_depth: usize,
    /// Most children under one node
    pub max_branching: usize,
    /// Bytes covered by all edge labels
    pub label_bytes: usize,
    /// Bytes in the word list itself
    pub word_bytes: usize,
    /// Bytes held by the node arena
    pub arena_bytes: usize,
}

impl TrieStats {
    pub fn compute<S: AsRef<str>>(trie: &Trie, words: &[S]) -> Self {
        let mut stats = TrieStats {
            word_count: words.len(),
            node_count: trie.node_count(),
            word_bytes: words.iter().map(|w| w.as_ref().len()).sum(),
            arena_bytes: trie.node_count() * std::mem::size_of::<TrieNode>(),
            ..Default::default()
        };

        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = trie.node(id);

            if let Some(substr) = node.substr() {
                stats.label_bytes += substr.len();
                if node.is_leaf() {
                    stats.leaf_count += 1;
                    stats.max_depth = stats.max_depth.max(depth);
                    if substr.is_empty() {
                        stats.terminator_count += 1;
                    }
                } else {
                    stats.internal_count += 1;
                }
            }

            let mut branching = 0;
            for child in trie.children(id) {
                branching += 1;
                stack.push((child, depth + 1));
            }
            stats.max_branching = stats.max_branching.max(branching);
        }

        stats
    }

    /// Fraction of word bytes that the labels actually cover
    ///
    /// Lower means more sharing. Zero for an empty word list.
    pub fn label_ratio(&self) -> f64 {
        if self.word_bytes == 0 {
            0.0
        } else {
            self.label_bytes as f64 / self.word_bytes as f64
        }
    }
}

/// Print trie statistics in a human-readable table
pub fn show_stats(stats: &TrieStats) {
    println!("Trie Statistics");
    println!("===============");
    println!();
    println!("Words:            {}", stats.word_count);
    println!("Nodes:            {}", stats.node_count);
    println!("  internal:       {}", stats.internal_count);
    println!("  leaves:         {}", stats.leaf_count);
    println!("  terminators:    {}", stats.terminator_count);
    println!("Max depth:        {}", stats.max_depth);
    println!("Max branching:    {}", stats.max_branching);
    println!();
    println!("Word bytes:       {}", format_size(stats.word_bytes as u64));
    println!(
        "Label bytes:      {} ({:.1}% of words)",
        format_size(stats.label_bytes as u64),
        stats.label_ratio() * 100.0
    );
    println!("Arena size:       {}", format_size(stats.arena_bytes as u64));
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_scenario() {
        let words = ["bear", "bull", "stock", "bell"];
        let trie = Trie::build(&words);
        let stats = TrieStats::compute(&trie, &words);

        // root, b, e, ar, ll, ull, stock
        assert_eq!(stats.node_count, 7);
        assert_eq!(stats.internal_count, 2);
        assert_eq!(stats.leaf_count, 4);
        assert_eq!(stats.terminator_count, 0);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.max_branching, 2);
        // b + e + ar + ll + ull + stock
        assert_eq!(stats.label_bytes, 14);
        assert_eq!(stats.word_bytes, 17);
    }

    #[test]
    fn test_stats_terminators() {
        let words = ["a", "ab", "abc", "abc"];
        let trie = Trie::build(&words);
        let stats = TrieStats::compute(&trie, &words);

        // Both copies of "abc" end under the "c" branch
        assert_eq!(stats.leaf_count, 4);
        assert_eq!(stats.terminator_count, 4);
        assert_eq!(stats.label_bytes, 3);
    }

    #[test]
    fn test_stats_empty() {
        let words: [&str; 0] = [];
        let trie = Trie::build(&words);
        let stats = TrieStats::compute(&trie, &words);

        assert_eq!(stats.node_count, 1);
        assert_eq!(stats.leaf_count, 0);
        assert_eq!(stats.label_ratio(), 0.0);
    }

    #[test]
    fn test_stats_json_roundtrip() {
        let words = ["bear", "bell"];
        let trie = Trie::build(&words);
        let stats = TrieStats::compute(&trie, &words);

        let json = serde_json::to_string(&stats).unwrap();
        let parsed: TrieStats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
    }
}
