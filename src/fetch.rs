//! HTTP fetching for news front pages.
//!
//! One [`reqwest::Client`] is built at startup and reused for every request,
//! so connections and headers are shared across sources. Each call carries a
//! fixed per-request timeout; nothing is retried.

use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Browser User-Agent sent with every request. Some news front pages serve
/// reduced or empty markup to unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Build the shared HTTP client with the fixed User-Agent and timeout.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Fetch a page body as text. Non-success HTTP statuses are errors, as are
/// DNS failures and timeouts.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let url = Url::parse(url)?;
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched page body");
    Ok(body)
}
