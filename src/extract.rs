//! Headline extraction from parsed front-page HTML.
//!
//! The extractor is a pure function over an already-parsed document: no
//! network, no I/O, and no errors. Selector rules are applied in priority
//! order, matches are filtered, de-duplicated keeping first occurrences, and
//! capped.

use itertools::Itertools;
use scraper::{Html, Selector};
use tracing::{debug, warn};

/// Extract headline candidates from a parsed document.
///
/// Selectors are applied in order; within one selector, elements are visited
/// in document order. A candidate survives if its whitespace-normalized text
/// is longer than `min_len` characters and contains none of the `excluded`
/// substrings. Duplicates keep their first occurrence and the result is
/// truncated to `max_count` entries.
///
/// An empty or partial document simply yields fewer (or zero) headlines.
/// Selector strings that fail to parse are logged and skipped.
pub fn extract_headlines(
    document: &Html,
    selectors: &[&str],
    min_len: usize,
    excluded: &[&str],
    max_count: usize,
) -> Vec<String> {
    let mut candidates = Vec::new();

    for raw in selectors {
        let selector = match Selector::parse(raw) {
            Ok(s) => s,
            Err(e) => {
                warn!(selector = raw, error = %e, "Skipping unparsable selector");
                continue;
            }
        };

        for element in document.select(&selector) {
            let text = element.text().collect::<Vec<_>>().join(" ");
            let headline = text.split_whitespace().join(" ");
            if headline.chars().count() <= min_len {
                continue;
            }
            if excluded.iter().any(|needle| headline.contains(needle)) {
                continue;
            }
            candidates.push(headline);
        }
    }

    debug!(candidates = candidates.len(), "Collected headline candidates");
    candidates.into_iter().unique().take(max_count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", body))
    }

    #[test]
    fn test_duplicate_headline_appears_once() {
        let document = doc(
            r#"
            <h2 data-testid="card-headline">Market rallies today strongly</h2>
            <p>filler</p>
            <h2 data-testid="card-headline">Market rallies today strongly</h2>
            "#,
        );
        let result = extract_headlines(
            &document,
            &[r#"h2[data-testid="card-headline"]"#],
            10,
            &[],
            20,
        );
        assert_eq!(result, vec!["Market rallies today strongly".to_string()]);
    }

    #[test]
    fn test_max_count_truncates() {
        let body: String = (0..30)
            .map(|i| format!("<h2>Unique headline number {:02}</h2>", i))
            .collect();
        let document = doc(&body);
        let result = extract_headlines(&document, &["h2"], 10, &[], 20);
        assert_eq!(result.len(), 20);
        assert_eq!(result[0], "Unique headline number 00");
        assert_eq!(result[19], "Unique headline number 19");
    }

    #[test]
    fn test_short_text_is_dropped() {
        // "Ten chars!" is exactly 10 characters, "11 chars ok" is 11; the
        // threshold is strict.
        let document = doc("<h2>Ten chars!</h2><h2>11 chars ok</h2>");
        let result = extract_headlines(&document, &["h2"], 10, &[], 20);
        assert_eq!(result, vec!["11 chars ok".to_string()]);
    }

    #[test]
    fn test_excluded_substring_is_dropped() {
        let document = doc(
            "<h2>Advertisement: buy this now</h2>\
             <h2>Parliament passes new budget</h2>",
        );
        let result = extract_headlines(&document, &["h2"], 10, &["Advertisement"], 20);
        assert_eq!(result, vec!["Parliament passes new budget".to_string()]);
    }

    #[test]
    fn test_order_is_first_seen_across_selectors() {
        let document = doc(
            r#"
            <h3 class="b">Headline from second selector</h3>
            <h2 class="a">Headline from first selector</h2>
            <h3 class="b">Another second selector match</h3>
            "#,
        );
        let result = extract_headlines(&document, &["h2.a", "h3.b"], 10, &[], 20);
        // All h2.a matches precede all h3.b matches; within a selector,
        // document order holds.
        assert_eq!(
            result,
            vec![
                "Headline from first selector".to_string(),
                "Headline from second selector".to_string(),
                "Another second selector match".to_string(),
            ]
        );
    }

    #[test]
    fn test_nested_markup_is_whitespace_normalized() {
        let document = doc("<h2>  Prime minister <span>visits\n  flood</span> zone </h2>");
        let result = extract_headlines(&document, &["h2"], 10, &[], 20);
        assert_eq!(result, vec!["Prime minister visits flood zone".to_string()]);
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        let document = doc("");
        let result = extract_headlines(&document, &["h2", ".story a"], 10, &[], 20);
        assert!(result.is_empty());
    }

    #[test]
    fn test_bad_selector_is_skipped() {
        let document = doc("<h2>Headline after a bad rule</h2>");
        let result = extract_headlines(&document, &["h2:::nope", "h2"], 10, &[], 20);
        assert_eq!(result, vec!["Headline after a bad rule".to_string()]);
    }

    #[test]
    fn test_no_duplicates_for_overlapping_selectors() {
        let document = doc(r#"<h2 data-testid="card-headline">Economy grows in third quarter</h2>"#);
        let result = extract_headlines(
            &document,
            &[r#"h2[data-testid="card-headline"]"#, r#"[data-testid="card-headline"]"#],
            10,
            &[],
            20,
        );
        assert_eq!(result, vec!["Economy grows in third quarter".to_string()]);
    }
}
