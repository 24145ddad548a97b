//! Data models for scraped headlines.
//!
//! A headline is just a trimmed string; equality is exact string equality.
//! [`SourceResult`] groups the unique headlines extracted from one source
//! during a single run; results live only until the aggregate report is
//! written.

use crate::sources::SourceConfig;

/// The unique, ordered headlines extracted from one source.
#[derive(Debug)]
pub struct SourceResult {
    /// Human-readable source name, e.g. "BBC News".
    pub source: String,
    /// Short tag used as the aggregate prefix, e.g. "BBC".
    pub tag: String,
    /// Unique headlines in first-seen order.
    pub headlines: Vec<String>,
}

impl SourceResult {
    pub fn new(config: &SourceConfig, headlines: Vec<String>) -> Self {
        Self {
            source: config.name.to_string(),
            tag: config.tag.to_string(),
            headlines,
        }
    }

    /// A result for a source whose fetch or parse failed.
    pub fn empty(config: &SourceConfig) -> Self {
        Self::new(config, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    /// Headlines prefixed with the bracketed source tag, e.g.
    /// `[BBC] Market rallies today`.
    pub fn tagged_headlines(&self) -> Vec<String> {
        self.headlines
            .iter()
            .map(|headline| format!("[{}] {}", self.tag, headline))
            .collect()
    }

    /// One-line scraping summary, e.g. `BBC News: 20 headlines`.
    pub fn summary_line(&self) -> String {
        format!("{}: {} headlines", self.source, self.headlines.len())
    }
}
