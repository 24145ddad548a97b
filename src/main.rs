//! # News Headlines
//!
//! A small scraper that collects top headlines from a fixed set of news
//! front pages and saves them to a timestamped text file.
//!
//! ## Features
//!
//! - Scrapes headlines from BBC News, India Today, and NDTV
//! - Site-specific ordered CSS selector lists with length and substring filters
//! - Stable de-duplication (first occurrence wins) and per-source result caps
//! - Numbered plain-text report with a Desktop fallback when the primary
//!   destination is not writable
//!
//! ## Usage
//!
//! ```sh
//! news_headlines
//! news_headlines -o today.txt --delay-ms 500
//! ```
//!
//! ## Architecture
//!
//! The run is strictly sequential:
//! 1. **Fetch**: Download each front page with one shared HTTP client
//! 2. **Extract**: Apply that source's selector rules, filter, dedupe, cap
//! 3. **Aggregate**: Tag each headline with its source and collect summaries
//! 4. **Write**: Save the numbered report
//!
//! A fixed politeness delay separates consecutive fetches. A source whose
//! fetch fails contributes nothing and never blocks the remaining sources.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod extract;
mod fetch;
mod models;
mod outputs;
mod scrape;
mod sources;
mod utils;

use cli::Cli;
use utils::{timestamped_filename, truncate_for_log};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_headlines starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.output, args.delay_ms, args.timeout_secs, "Parsed CLI arguments");

    let client = fetch::build_client(Duration::from_secs(args.timeout_secs))?;
    let delay = Duration::from_millis(args.delay_ms);

    // ---- Scrape all sources sequentially ----
    let results = scrape::run(&client, sources::all(), delay).await;
    let (headlines, summary) = scrape::aggregate(&results);

    if headlines.is_empty() {
        error!("No headlines were scraped; check your connection or the source selectors");
        return Ok(());
    }

    info!(total = headlines.len(), "Scraping summary");
    for line in &summary {
        info!(source = %line, "Scraped source");
    }

    // ---- Write the report ----
    let filename = args.output.unwrap_or_else(timestamped_filename);
    info!(path = %filename, "Saving headlines");
    match outputs::text::write_report(&headlines, Path::new(&filename)).await {
        Ok(path) => info!(path = %path.display(), count = headlines.len(), "Report saved"),
        Err(e) => error!(path = %filename, error = %e, "Failed to save report"),
    }

    // ---- Preview of the first few headlines ----
    for (i, headline) in headlines.iter().take(5).enumerate() {
        info!(index = i + 1, headline = %truncate_for_log(headline, 120), "Preview");
    }
    if headlines.len() > 5 {
        info!(more = headlines.len() - 5, "Additional headlines in the report");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
