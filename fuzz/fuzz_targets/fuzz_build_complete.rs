#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use patrie::trie::{check_invariants, Trie};

#[derive(Debug, Arbitrary)]
struct Input {
    words: Vec<String>,
    prefixes: Vec<String>,
}

fuzz_target!(|input: Input| {
    // Arbitrary strings may split multi-byte chars at label boundaries;
    // the trie works on bytes, so everything below must still hold
    let trie = Trie::build(&input.words);
    check_invariants(&trie, &input.words).unwrap();

    for prefix in &input.prefixes {
        let mut expected: Vec<usize> = input
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.as_bytes().starts_with(prefix.as_bytes()))
            .map(|(i, _)| i)
            .collect();
        let actual = trie.complete(&input.words, prefix).map(|leaves| {
            let mut found: Vec<usize> = leaves
                .iter()
                .filter_map(|leaf| leaf.substr().map(|s| s.word_index()))
                .collect();
            found.sort_unstable();
            found
        });

        if expected.is_empty() {
            assert!(actual.is_none());
        } else {
            expected.sort_unstable();
            assert_eq!(actual, Some(expected));
        }
    }
});
