//! Data structures for the crawler application.

mod article;
mod config;

pub use article::{Article, SearchHit};
pub use config::{CleaningConfig, Config, CrawlerConfig, ExtractConfig, SearchConfig};
