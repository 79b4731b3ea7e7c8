use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use patrie::output::{self, CompletionReport};
use patrie::trie::render::tree_lines;
use patrie::trie::stats::show_stats;
use patrie::trie::{check_invariants, Trie, TrieBuilder, TrieStats};
use patrie::utils::progress::{ProgressBar, ProgressStyle};
use patrie::utils::{get_config_path, load_words, AppConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Word lists smaller than this build without a progress bar
const PROGRESS_THRESHOLD: usize = 50_000;

#[derive(Parser)]
#[command(name = "patrie")]
#[command(about = "Prefix completion over a compressed trie of words")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file (one lowercase word per line, optional count header)
    #[arg(short, long, global = true)]
    words: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete one or more prefixes
    Complete {
        /// Prefixes to complete (an empty string matches every word)
        #[arg(required = true)]
        prefixes: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Maximum words to print per prefix
        #[arg(short, long)]
        limit: Option<usize>,

        /// Keep trie order instead of sorting
        #[arg(long)]
        unsorted: bool,
    },
    /// Print the trie structure
    Tree,
    /// Show trie statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify the trie's structural invariants
    Check,
    /// Show the effective configuration
    Config {
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let color = config.color && !cli.no_color;

    if let Commands::Config { init } = cli.command {
        return show_config(&config, init);
    }

    let path = cli
        .words
        .or_else(|| config.default_words.clone())
        .context("No word list given. Pass --words FILE or set default_words in the config.")?;
    let words = load_words(&path)?;
    let trie = build_with_progress(&words);

    match cli.command {
        Commands::Complete {
            prefixes,
            json,
            limit,
            unsorted,
        } => {
            let limit = limit.or(config.result_limit());
            let sort = config.sort_results && !unsorted;

            let found = trie.complete_batch(&words, &prefixes);
            let reports: Vec<CompletionReport<'_>> = prefixes
                .iter()
                .zip(found)
                .map(|(prefix, leaves)| {
                    let matched = leaves.map(|leaves| {
                        leaves
                            .into_iter()
                            .filter_map(|leaf| leaf.word(&words))
                            .collect()
                    });
                    CompletionReport::new(prefix, matched, sort, limit)
                })
                .collect();

            if json {
                output::print_completions_json(&reports)?;
            } else {
                output::print_completions(&reports, color)?;
            }
        }
        Commands::Tree => {
            let lines = tree_lines(&trie, &words);
            output::print_tree(&lines, color)?;
        }
        Commands::Stats { json } => {
            let stats = TrieStats::compute(&trie, &words);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                show_stats(&stats);
            }
        }
        Commands::Check => {
            check_invariants(&trie, &words)
                .context("Trie failed invariant check")?;
            println!(
                "OK: {} words, {} nodes",
                words.len(),
                trie.node_count()
            );
        }
        Commands::Config { .. } => unreachable!("handled before loading words"),
    }

    Ok(())
}

/// Build the trie, showing a progress bar for large word lists
fn build_with_progress(words: &[String]) -> Trie {
    let start = std::time::Instant::now();

    let bar = if words.len() >= PROGRESS_THRESHOLD {
        let bar = ProgressBar::new(words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} words")
        {
            bar.set_style(style.progress_chars("=>-"));
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut builder = TrieBuilder::with_capacity(words.len());
    for word_index in 0..words.len() {
        builder.insert(words, word_index);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let trie = builder.finish();
    info!(
        words = words.len(),
        nodes = trie.node_count(),
        "built trie in {:.3}s",
        start.elapsed().as_secs_f32()
    );
    trie
}

fn show_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = get_config_path()?;

    if init && !path.exists() {
        AppConfig::default().save()?;
        println!("Wrote default config to {}", path.display());
    }

    println!("Config file: {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
