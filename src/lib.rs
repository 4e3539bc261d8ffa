// src/lib.rs

//! navercrawl: keyword-driven Naver mobile news crawler.
//!
//! Collects article links from the mobile news search results, extracts and
//! filters each article's body text, normalizes titles and bodies, and
//! persists one JSON record per article (JSONL).

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
