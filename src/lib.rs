//! # patrie - Compressed prefix trie for word completion
//!
//! patrie builds a Patricia-style trie over a fixed, ordered list of
//! lowercase words and answers prefix-completion queries against it.
//! Edge labels are `(word, start, end)` references into the caller's word
//! array; the trie never copies text.
//!
//! ## Architecture
//!
//! - [`trie`] - Construction, completion, debug rendering, statistics
//! - [`output`] - Terminal and JSON output for the CLI
//! - [`utils`] - Config and word-list loading
//!
//! ## Quick Start
//!
//! ```
//! use patrie::trie::Trie;
//!
//! let words = ["bear", "bull", "stock", "bell"];
//! let trie = Trie::build(&words);
//!
//! let mut found = trie.complete_words(&words, "be").unwrap();
//! found.sort();
//! assert_eq!(found, ["bear", "bell"]);
//!
//! // No word starts with "z"
//! assert!(trie.complete(&words, "z").is_none());
//! ```
//!
//! ## Insertion Order
//!
//! Words are inserted first to last, and the shape of the trie depends on
//! that order. Completion results never do.

pub mod output;
pub mod trie;
pub mod utils;

pub use trie::{build_trie, completion_list, Indexes, Trie, TrieNode};
