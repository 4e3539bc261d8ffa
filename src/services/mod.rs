//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Search link collection (`SearchCollector`)
//! - Article body fetching (`ArticleFetcher`)
//! - Text normalization (`clean_text`)

pub mod article;
pub mod clean;
pub mod search;

pub use article::ArticleFetcher;
pub use clean::clean_text;
pub use search::SearchCollector;
