//! Per-source scraping configuration.
//!
//! Site-specific knowledge lives here as data: each source carries its
//! front-page URL, an ordered list of headline selectors, filter thresholds,
//! and a result cap. The scrape loop itself is generic (see [`crate::scrape`]).
//!
//! Selector lists are brittle by nature; sites change their markup without
//! notice. Treat them as swappable configuration.

/// Configuration for one news source.
#[derive(Debug, Clone, Copy)]
pub struct SourceConfig {
    /// Human-readable source name, used in summary lines.
    pub name: &'static str,
    /// Short tag prefixed to each headline in the aggregate, e.g. `[BBC]`.
    pub tag: &'static str,
    /// Front-page URL to fetch.
    pub url: &'static str,
    /// Headline selectors, applied in priority order.
    pub selectors: &'static [&'static str],
    /// Minimum headline length in characters; shorter matches are noise.
    pub min_len: usize,
    /// Substrings that disqualify a match.
    pub excluded: &'static [&'static str],
    /// Maximum number of headlines kept for this source.
    pub max_count: usize,
}

/// The configured sources, in fetch order.
pub fn all() -> &'static [SourceConfig] {
    &SOURCES
}

static SOURCES: [SourceConfig; 3] = [
    SourceConfig {
        name: "BBC News",
        tag: "BBC",
        url: "https://www.bbc.com/news",
        selectors: &[
            r#"h2[data-testid="card-headline"]"#,
            r#"h3[data-testid="card-headline"]"#,
            "h2.sc-4fedabc7-3",
            "h3.sc-4fedabc7-3",
            ".gs-c-promo-heading__title",
            r#"[data-testid="card-headline"]"#,
        ],
        min_len: 10,
        excluded: &[],
        max_count: 20,
    },
    SourceConfig {
        name: "India Today",
        tag: "India Today",
        url: "https://www.indiatoday.in",
        selectors: &[
            ".detail h2 a",
            ".detail h3 a",
            ".story__headline a",
            ".catagory-listing h2 a",
            ".catagory-listing h3 a",
            "h2.heading a",
            "h3.heading a",
            ".B1S3_content__wrap__9mSB6 h2 a",
            ".B1S3_content__wrap__9mSB6 h3 a",
            "a[data-vars-link-name]",
        ],
        min_len: 10,
        excluded: &["Advertisement"],
        max_count: 15,
    },
    SourceConfig {
        name: "NDTV",
        tag: "NDTV",
        url: "https://www.ndtv.com",
        selectors: &[
            ".news_Itm h2 a",
            ".news_Itm h3 a",
            ".story-list h2 a",
            ".story-list h3 a",
            ".main-news h2 a",
            ".main-news h3 a",
            ".story__title a",
            ".story-title a",
            "h2.story-title a",
            "h3.story-title a",
            ".story_overlay h2 a",
            ".story_overlay h3 a",
        ],
        min_len: 10,
        excluded: &["Advertisement"],
        max_count: 20,
    },
];
