// src/services/search.rs

//! Search link collector.
//!
//! Walks the paginated mobile news search results for a keyword and extracts
//! article links whose anchor text contains the keyword.

use std::collections::HashSet;
use std::sync::Arc;

use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Config, SearchHit};
use crate::utils::http;
use crate::utils::url::search_page_url;

/// Service for collecting article links from search-result pages.
pub struct SearchCollector {
    config: Arc<Config>,
    client: Client,
}

impl SearchCollector {
    /// Create a new collector sharing the run-wide HTTP client.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Fetch article links for `keyword` across `pages` result pages.
    ///
    /// Requests are sequential. Any HTTP failure propagates and is fatal for
    /// the run. Results are deduplicated by URL across pages, first
    /// occurrence wins, discovery order preserved.
    pub async fn fetch_links(&self, keyword: &str, pages: u32) -> Result<Vec<SearchHit>> {
        let mut seen = HashSet::new();
        let mut hits = Vec::new();

        for page in 1..=pages {
            let url = search_page_url(&self.config.search.endpoint, keyword, page)?;
            log::debug!("Fetching search page {page}: {url}");

            let document = http::fetch_page(&self.client, &url).await?;
            extract_hits(
                &document,
                keyword,
                &self.config.search.article_prefix,
                &mut seen,
                &mut hits,
            )?;
        }

        log::info!("Collected {} unique article links", hits.len());
        Ok(hits)
    }
}

/// Extract matching article links from one parsed search-results page.
///
/// Keeps anchors whose href starts with `article_prefix` and whose visible
/// text contains `keyword` as a case-sensitive substring.
pub fn extract_hits(
    document: &Html,
    keyword: &str,
    article_prefix: &str,
    seen: &mut HashSet<String>,
    hits: &mut Vec<SearchHit>,
) -> Result<()> {
    let anchor_sel =
        Selector::parse("a[href]").map_err(|e| AppError::selector("a[href]", format!("{e:?}")))?;

    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let text: String = anchor.text().map(str::trim).collect();

        if href.starts_with(article_prefix) && text.contains(keyword) {
            if seen.insert(href.to_string()) {
                hits.push(SearchHit {
                    title: text,
                    url: href.to_string(),
                });
            }
        }
    }
    Ok(())
}
