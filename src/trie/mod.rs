//! Compressed prefix trie over a fixed word list
//!
//! Edge labels are `(word, start, end)` references into the caller's word
//! array, so building copies no text. Once built, a trie can serve any
//! number of concurrent read-only completion queries.
//!
//! ## Architecture
//!
//! - `types`: substring references and nodes
//! - `tree`: the node arena and read-only navigation
//! - `builder`: incremental, order-dependent insertion
//! - `search`: prefix completion
//! - `render`: indented debug dump
//! - `stats`: shape statistics
//! - `validate`: structural invariant checks

pub mod builder;
pub mod render;
pub mod search;
pub mod stats;
pub mod tree;
pub mod types;
pub mod validate;

pub use builder::TrieBuilder;
pub use render::render_tree;
pub use search::completion_list;
pub use stats::TrieStats;
pub use tree::{build_trie, Children, Trie};
pub use types::*;
pub use validate::check_invariants;
