//! Web search: query URL construction and result extraction.
//!
//! Search mode fetches a Bing results page through the same engine as any
//! other URL and pulls (title, link) pairs out of the result markup.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::{MAX_SEARCH_RESULTS, SEARCH_ENDPOINT};

const RESULT_SELECTOR_STR: &str = "li.b_algo";
const LINK_SELECTOR_STR: &str = "a";

static RESULT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!("Failed to parse result selector '{RESULT_SELECTOR_STR}': {e}");
        // Fall back to a selector that matches nothing instead of panicking.
        Selector::parse("*:not(*)").expect("fallback selector is valid")
    })
});

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(LINK_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!("Failed to parse link selector '{LINK_SELECTOR_STR}': {e}");
        Selector::parse("*:not(*)").expect("fallback selector is valid")
    })
});

/// One extracted search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Link text of the result anchor.
    pub title: String,
    /// Destination URL of the result anchor.
    pub link: String,
}

/// Builds the search query URL for `query`, form-urlencoding the terms
/// (spaces become `+`).
pub fn build_search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{SEARCH_ENDPOINT}?q={encoded}")
}

/// Extracts up to [`MAX_SEARCH_RESULTS`] (title, link) pairs from a search
/// results page, in document order.
pub fn extract_results(html: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for item in document.select(&RESULT_SELECTOR) {
        let Some(anchor) = item
            .select(&LINK_SELECTOR)
            .find(|a| a.value().attr("href").is_some())
        else {
            continue;
        };
        let link = anchor.value().attr("href").unwrap_or_default().to_string();
        let title = anchor
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if title.is_empty() && link.is_empty() {
            continue;
        }
        results.push(SearchResult { title, link });
        if results.len() >= MAX_SEARCH_RESULTS {
            break;
        }
    }

    log::debug!("extracted {} search results", results.len());
    results
}
