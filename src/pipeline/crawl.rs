// src/pipeline/crawl.rs

//! Crawl orchestration: collect links, fetch and clean each article,
//! persist records.

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{Article, CleaningConfig, Config, SearchHit};
use crate::services::{ArticleFetcher, SearchCollector, clean_text};
use crate::storage::JsonlWriter;
use crate::utils::http;

/// Value-level result of processing one search hit.
///
/// Per-article failures become `Skipped` so orchestration branches on a
/// value instead of unwinding.
#[derive(Debug)]
pub enum ArticleOutcome {
    Saved(Article),
    Skipped { url: String, reason: String },
}

/// Summary of a crawl run.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    /// Unique article links collected from search results
    pub collected: usize,

    /// Records written to the output file
    pub written: usize,

    /// Articles skipped after a fetch or extraction failure
    pub skipped: usize,
}

/// Run the full crawl for one keyword and write JSONL records.
///
/// Link collection failures are fatal and propagate. Per-article failures
/// are logged and skipped; the run continues. The output file is created
/// even when nothing is written.
pub async fn run_crawl(
    config: Arc<Config>,
    keyword: &str,
    pages: u32,
    output_path: &Path,
) -> Result<CrawlOutcome> {
    let client = http::create_client(&config.crawler)?;

    let collector = SearchCollector::new(Arc::clone(&config), client.clone());
    let hits = collector.fetch_links(keyword, pages).await?;

    let fetcher = ArticleFetcher::new(Arc::clone(&config), client);
    let mut writer = JsonlWriter::create(output_path).await?;

    let mut outcome = CrawlOutcome {
        collected: hits.len(),
        ..CrawlOutcome::default()
    };

    // Strictly sequential: each article is fetched and written before the
    // next request is issued.
    for hit in &hits {
        match process_hit(&fetcher, &config.cleaning, hit).await {
            ArticleOutcome::Saved(article) => {
                writer.append(&article).await?;
            }
            ArticleOutcome::Skipped { url, reason } => {
                log::warn!("Skipping article {url}: {reason}");
                outcome.skipped += 1;
            }
        }
    }

    writer.flush().await?;
    outcome.written = writer.written();

    log::info!(
        "Crawl finished: {} collected, {} written, {} skipped",
        outcome.collected,
        outcome.written,
        outcome.skipped
    );

    Ok(outcome)
}

/// Fetch and normalize a single article.
///
/// An empty body (no recognizable container) still yields a record; only
/// fetch and extraction errors cause a skip.
async fn process_hit(
    fetcher: &ArticleFetcher,
    cleaning: &CleaningConfig,
    hit: &SearchHit,
) -> ArticleOutcome {
    match fetcher.fetch_body(&hit.url).await {
        Ok(body) => ArticleOutcome::Saved(Article {
            title: clean_text(cleaning, &hit.title),
            body: clean_text(cleaning, &body),
        }),
        Err(error) => ArticleOutcome::Skipped {
            url: hit.url.clone(),
            reason: error.to_string(),
        },
    }
}
