#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing arbitrary text must return an error, never panic
    if let Ok(words) = patrie::utils::parse_words(data) {
        let trie = patrie::trie::Trie::build(&words);
        patrie::trie::check_invariants(&trie, &words).unwrap();
    }
});
