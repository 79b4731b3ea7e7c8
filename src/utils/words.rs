//! Word list loading
//!
//! A word file holds one lowercase word per line. It may start with a line
//! holding only the number of words that follow, which is checked against
//! the actual count. Blank lines are ignored and surrounding whitespace is
//! trimmed.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse a word file
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let words = parse_words(&content)
        .with_context(|| format!("Invalid word list {}", path.display()))?;
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse word-list text
pub fn parse_words(content: &str) -> Result<Vec<String>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .peekable();

    let expected = match lines.peek() {
        Some((line_no, first)) if first.bytes().all(|b| b.is_ascii_digit()) => {
            let count: usize = first
                .parse()
                .with_context(|| format!("line {}: bad word count {:?}", line_no, first))?;
            lines.next();
            Some(count)
        }
        _ => None,
    };

    let mut words = Vec::new();
    for (line_no, word) in lines {
        if let Some(bad) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            bail!(
                "line {}: {:?} contains {:?}; words must be lowercase a-z",
                line_no,
                word,
                bad
            );
        }
        words.push(word.to_string());
    }

    if let Some(count) = expected {
        if count != words.len() {
            bail!("header says {} words but {} follow", count, words.len());
        }
    }

    Ok(words)
}
