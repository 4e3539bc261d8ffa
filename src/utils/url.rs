// src/utils/url.rs

//! URL construction and rewriting.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::Result;

/// Matches desktop article URLs at the start of the string, capturing the
/// outlet ID (oid) and article ID (aid).
static DESKTOP_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://n\.news\.naver\.com/article/(\d+)/(\d+)")
        .expect("DESKTOP_ARTICLE regex")
});

/// Build the search-results URL for one page of keyword results.
///
/// Page indices start at 1; each page is a window of 10 results. The fixed
/// parameters select the mobile news tab, enable the date-range condition,
/// and sort by recency within the last day.
pub fn search_page_url(endpoint: &str, keyword: &str, page: u32) -> Result<String> {
    let start = 1 + (page - 1) * 10;

    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut()
        .append_pair("ssc", "tab.m_news.all")
        .append_pair("query", keyword)
        .append_pair("start", &start.to_string())
        .append_pair("pd", "4")
        .append_pair("nso", "so:r,p:1d");

    Ok(url.into())
}

/// Rewrite a desktop article URL to the mobile reader endpoint.
///
/// The reader view takes oid/aid as query parameters and yields a simpler
/// page structure for extraction. URLs that do not match the desktop
/// pattern are returned unchanged.
pub fn to_reader_url(url: &str) -> String {
    match DESKTOP_ARTICLE.captures(url) {
        Some(caps) => format!(
            "https://m.news.naver.com/read.nhn?oid={}&aid={}",
            &caps[1], &caps[2]
        ),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_desktop_article_url() {
        assert_eq!(
            to_reader_url("https://n.news.naver.com/article/123/456789"),
            "https://m.news.naver.com/read.nhn?oid=123&aid=456789"
        );
    }

    #[test]
    fn rewrites_on_prefix_match_with_trailing_query() {
        // Prefix match: trailing query parts are dropped.
        assert_eq!(
            to_reader_url("https://n.news.naver.com/article/001/0001?sid=105"),
            "https://m.news.naver.com/read.nhn?oid=001&aid=0001"
        );
    }

    #[test]
    fn leaves_other_urls_unmodified() {
        let url = "https://example.com/news/1";
        assert_eq!(to_reader_url(url), url);

        let mobile = "https://m.news.naver.com/read.nhn?oid=1&aid=2";
        assert_eq!(to_reader_url(mobile), mobile);
    }

    #[test]
    fn search_url_encodes_keyword_and_offset() {
        let url = search_page_url("https://m.search.naver.com/search.naver", "IT 뉴스", 1)
            .unwrap();
        assert!(url.starts_with("https://m.search.naver.com/search.naver?"));
        assert!(url.contains("query=IT+%EB%89%B4%EC%8A%A4"));
        assert!(url.contains("start=1"));
        assert!(url.contains("ssc=tab.m_news.all"));
    }

    #[test]
    fn search_url_page_offsets() {
        let page2 = search_page_url("https://m.search.naver.com/search.naver", "IT", 2).unwrap();
        assert!(page2.contains("start=11"));

        let page6 = search_page_url("https://m.search.naver.com/search.naver", "IT", 6).unwrap();
        assert!(page6.contains("start=51"));
    }

    #[test]
    fn search_url_rejects_invalid_endpoint() {
        assert!(search_page_url("not a url", "IT", 1).is_err());
    }
}
