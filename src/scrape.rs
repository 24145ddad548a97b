//! Sequential scrape orchestration.
//!
//! Sources are processed one at a time in their configured order, separated
//! by an unconditional politeness delay. A failed fetch is logged and yields
//! an empty result for that source; it never blocks the remaining sources.

use crate::extract::extract_headlines;
use crate::fetch;
use crate::models::SourceResult;
use crate::sources::SourceConfig;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

/// Scrape one source: fetch its front page, parse it, and run the extractor
/// with that source's parameters.
#[instrument(level = "info", skip_all, fields(source = source.name))]
pub async fn scrape_source(client: &Client, source: &SourceConfig) -> SourceResult {
    info!(url = source.url, "Fetching headlines");
    let html = match fetch::fetch_page(client, source.url).await {
        Ok(html) => html,
        Err(e) => {
            error!(url = source.url, error = %e, "Fetch failed; source yields no headlines");
            return SourceResult::empty(source);
        }
    };

    let document = Html::parse_document(&html);
    let headlines = extract_headlines(
        &document,
        source.selectors,
        source.min_len,
        source.excluded,
        source.max_count,
    );
    info!(count = headlines.len(), "Extracted headlines");
    SourceResult::new(source, headlines)
}

/// Scrape all sources sequentially with a fixed delay between fetches.
pub async fn run(client: &Client, sources: &[SourceConfig], delay: Duration) -> Vec<SourceResult> {
    let mut results = Vec::with_capacity(sources.len());
    for (i, source) in sources.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            debug!(?delay, "Politeness delay before next source");
            sleep(delay).await;
        }
        results.push(scrape_source(client, source).await);
    }
    results
}

/// Flatten per-source results into tagged headlines plus one summary line per
/// source. Sources that produced nothing contribute neither headlines nor a
/// summary line.
pub fn aggregate(results: &[SourceResult]) -> (Vec<String>, Vec<String>) {
    let mut headlines = Vec::new();
    let mut summary = Vec::new();
    for result in results {
        if result.is_empty() {
            continue;
        }
        headlines.extend(result.tagged_headlines());
        summary.push(result.summary_line());
    }
    (headlines, summary)
}
