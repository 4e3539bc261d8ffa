//! Pipeline entry points for crawler operations.

pub mod crawl;

pub use crawl::{ArticleOutcome, CrawlOutcome, run_crawl};
