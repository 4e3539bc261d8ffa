// src/services/article.rs

//! Article body fetcher.
//!
//! Fetches an article page (preferring the mobile reader view), locates the
//! body container, and filters extracted lines down to body text.

use std::sync::Arc;

use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Config, ExtractConfig};
use crate::utils::http;
use crate::utils::url::to_reader_url;

/// Service for fetching and extracting article body text.
pub struct ArticleFetcher {
    config: Arc<Config>,
    client: Client,
}

impl ArticleFetcher {
    /// Create a new fetcher sharing the run-wide HTTP client.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Fetch the body text for a single article URL.
    ///
    /// Desktop article URLs are rewritten to the reader endpoint first.
    /// A page without any known body container yields an empty string;
    /// that is a valid outcome, not an error.
    pub async fn fetch_body(&self, url: &str) -> Result<String> {
        let fetch_url = to_reader_url(url);
        log::debug!("Fetching article: {fetch_url}");

        let document = http::fetch_page(&self.client, &fetch_url).await?;
        extract_body(&document, &self.config.extract)
    }
}

/// Extract filtered body text from a parsed article page.
///
/// Tries the configured container selectors in order and uses the first
/// match. Text nodes are split into physical lines, each trimmed and
/// filtered independently; lines shorter than the configured minimum or
/// containing a blocklist token are dropped. Survivors are joined as
/// blank-line-separated paragraphs.
pub fn extract_body(document: &Html, config: &ExtractConfig) -> Result<String> {
    let Some(container) = find_container(document, config)? else {
        return Ok(String::new());
    };

    // A single text node can hold raw newlines; the filter applies per
    // physical line, not per node.
    let lines: Vec<&str> = container
        .text()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| passes_filter(line, config))
        .collect();

    Ok(lines.join("\n\n"))
}

fn find_container<'a>(
    document: &'a Html,
    config: &ExtractConfig,
) -> Result<Option<scraper::ElementRef<'a>>> {
    for selector_str in &config.body_selectors {
        let selector = Selector::parse(selector_str)
            .map_err(|e| AppError::selector(selector_str, format!("{e:?}")))?;
        if let Some(element) = document.select(&selector).next() {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

/// Short lines are UI strings and captions; blocklist tokens mark
/// subscription prompts, outlet credits, and similar boilerplate.
fn passes_filter(line: &str, config: &ExtractConfig) -> bool {
    if line.chars().count() < config.min_line_chars {
        return false;
    }
    !config.blocklist.iter().any(|token| line.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> String {
        let document = Html::parse_document(html);
        extract_body(&document, &ExtractConfig::default()).unwrap()
    }

    // 40 chars, passes the length filter.
    const PARA1: &str = "이것은 충분히 긴 본문 문단입니다. 기사 내용이 여기에 이어집니다.";
    const PARA2: &str = "두 번째 문단도 충분히 길어서 필터를 통과하게 되어 있습니다.";

    #[test]
    fn extracts_from_primary_container() {
        let html = format!(r#"<div id="newsct_article"><p>{PARA1}</p><p>{PARA2}</p></div>"#);
        assert_eq!(extract(&html), format!("{PARA1}\n\n{PARA2}"));
    }

    #[test]
    fn falls_back_through_container_priority() {
        let html = format!(r#"<div id="newsEndContents"><p>{PARA1}</p></div>"#);
        assert_eq!(extract(&html), PARA1);

        let html = format!(
            r#"<div id="articleBodyContents"><p>{PARA1}</p></div>
               <div id="newsEndContents"><p>{PARA2}</p></div>"#
        );
        assert_eq!(extract(&html), PARA1);
    }

    #[test]
    fn first_selector_wins_over_later_ones() {
        let html = format!(
            r#"<div id="newsEndContents"><p>{PARA2}</p></div>
               <div id="newsct_article"><p>{PARA1}</p></div>"#
        );
        assert_eq!(extract(&html), PARA1);
    }

    #[test]
    fn missing_container_yields_empty_body() {
        assert_eq!(extract("<div id=\"other\"><p>text</p></div>"), "");
    }

    #[test]
    fn length_filter_boundary() {
        let line29 = "a".repeat(29);
        let line30 = "a".repeat(30);
        let html = format!(
            r#"<div id="newsct_article"><p>{line29}</p><p>{line30}</p></div>"#
        );
        assert_eq!(extract(&html), line30);
    }

    #[test]
    fn length_filter_counts_chars_not_bytes() {
        // 30 Hangul syllables: 90 bytes but exactly 30 characters.
        let hangul30 = "가".repeat(30);
        let html = format!(r#"<div id="newsct_article"><p>{hangul30}</p></div>"#);
        assert_eq!(extract(&html), hangul30);
    }

    #[test]
    fn blocklist_tokens_drop_lines() {
        let credit = format!("{} 언론사 제공", "가".repeat(30));
        let subscribe = format!("{} 구독하기 버튼을 눌러주세요", "나".repeat(30));
        let html = format!(
            r#"<div id="newsct_article"><p>{credit}</p><p>{PARA1}</p><p>{subscribe}</p></div>"#
        );
        assert_eq!(extract(&html), PARA1);
    }

    #[test]
    fn all_lines_filtered_yields_empty_body() {
        let html = r#"<div id="newsct_article"><p>짧은 줄</p><p>또 짧은 줄</p></div>"#;
        assert_eq!(extract(html), "");
    }

    #[test]
    fn filters_each_physical_line_within_a_text_node() {
        let long = "a".repeat(40);
        let html = format!("<div id=\"newsct_article\"><p>{long}\n짧은 줄</p></div>");
        assert_eq!(extract(&html), long);
    }

    #[test]
    fn blocklist_fragment_does_not_drop_sibling_lines() {
        let html = format!(
            "<div id=\"newsct_article\"><p>{PARA1}\n{} 구독 안내문</p></div>",
            "가".repeat(30)
        );
        assert_eq!(extract(&html), PARA1);
    }

    #[test]
    fn lines_are_trimmed_before_filtering() {
        let padded = format!("   {PARA1}   ");
        let html = format!(r#"<div id="newsct_article"><p>{padded}</p></div>"#);
        assert_eq!(extract(&html), PARA1);
    }
}
