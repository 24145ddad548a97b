//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default, so running the binary with no arguments
//! scrapes the built-in sources and writes a timestamped report to the
//! current directory.

use clap::Parser;

/// Command-line arguments for the news headlines scraper.
///
/// # Examples
///
/// ```sh
/// # Default run: timestamped report in the current directory
/// news_headlines
///
/// # Fixed output path, shorter politeness delay
/// news_headlines -o today.txt --delay-ms 500
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output file for the headline report (default: news_headlines_<timestamp>.txt)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pause between source fetches, in milliseconds
    #[arg(long, default_value_t = 1_000)]
    pub delay_ms: u64,

    /// Per-request HTTP timeout, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}
