//! Terminal output for completions and tree dumps

use crate::trie::render::TreeLine;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Completions for one prefix, as printed by `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport<'w> {
    pub prefix: &'w str,
    /// `false` is the explicit no-match signal
    pub matched: bool,
    /// Total number of matching words, before any limit
    pub total: usize,
    pub words: Vec<&'w str>,
}

impl<'w> CompletionReport<'w> {
    /// Build a report, applying ordering and limit to the printed words
    pub fn new(
        prefix: &'w str,
        found: Option<Vec<&'w str>>,
        sort: bool,
        limit: Option<usize>,
    ) -> Self {
        let matched = found.is_some();
        let mut words = found.unwrap_or_default();
        let total = words.len();
        if sort {
            words.sort_unstable();
        }
        if let Some(limit) = limit {
            words.truncate(limit);
        }
        Self {
            prefix,
            matched,
            total,
            words,
        }
    }
}

fn color_choice(color: bool) -> ColorChoice {
    if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print completions with the matched prefix highlighted
pub fn print_completions(reports: &[CompletionReport<'_>], color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(color));
    let multiple = reports.len() > 1;

    for (i, report) in reports.iter().enumerate() {
        if multiple {
            if i > 0 {
                writeln!(stdout)?;
            }
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(stdout, "{}", report.prefix)?;
            stdout.reset()?;
        }

        if !report.matched {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(stdout, "no match for {:?}", report.prefix)?;
            stdout.reset()?;
            continue;
        }

        for word in &report.words {
            print_match_line(&mut stdout, word, report.prefix.len())?;
        }

        let hidden = report.total - report.words.len();
        if hidden > 0 {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            writeln!(stdout, "... and {} more", hidden)?;
            stdout.reset()?;
        }
    }

    Ok(())
}

/// Print a word with its first `prefix_len` bytes highlighted
fn print_match_line(stdout: &mut StandardStream, word: &str, prefix_len: usize) -> io::Result<()> {
    let split = prefix_len.min(word.len());
    let (matched, rest) = match (word.get(..split), word.get(split..)) {
        (Some(matched), Some(rest)) => (matched, rest),
        _ => ("", word),
    };

    if !matched.is_empty() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", matched)?;
        stdout.reset()?;
    }
    writeln!(stdout, "{}", rest)?;

    Ok(())
}

/// Print completions as JSON, one object per prefix
pub fn print_completions_json(reports: &[CompletionReport<'_>]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, reports)?;
    writeln!(lock)?;
    Ok(())
}

/// Print a tree dump, dimming the structure and highlighting labels
pub fn print_tree(lines: &[TreeLine<'_>], color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(color));

    for line in lines {
        write!(stdout, "{}", "    ".repeat(line.depth))?;

        let Some(substr) = line.substr else {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(stdout, "root")?;
            stdout.reset()?;
            continue;
        };

        // Path text above this node, then this node's own label
        let above = line.path.get(..substr.start_index()).unwrap_or("");
        let label = line.path.get(substr.start_index()..).unwrap_or("");
        write!(stdout, "{}", above)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "{}", label)?;
        stdout.reset()?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, " {}", substr)?;
        stdout.reset()?;
    }

    Ok(())
}
