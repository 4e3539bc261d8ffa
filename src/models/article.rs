//! Article data structures.

use serde::{Deserialize, Serialize};

/// A single search result: visible anchor text and the article URL.
///
/// Produced by the search collector, consumed immediately by the pipeline;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Anchor text from the search results page
    pub title: String,

    /// Full article URL (desktop form)
    pub url: String,
}

/// One output record: a normalized title/body pair.
///
/// Serialized as one JSON object per line; non-ASCII characters are written
/// literally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub body: String,
}
