//! Retrieval type definitions.

use serde::{Deserialize, Serialize};

/// A document returned by the InfoHub search API.
///
/// All fields except `relevance_score` are fixed when the document is mapped
/// from an API record; the score is filled in by the reranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    pub name: String,

    /// Plain-text description (HTML stripped)
    pub description: String,

    /// Document type name (e.g., "განმარტება")
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Base type name
    pub base_type: String,

    /// Public link, empty when the record had no unique key
    pub url: String,

    /// Stable external identifier; deduplication key
    pub uuid: String,

    /// Receipt date as reported by the API
    pub date: String,

    /// Keyword-overlap relevance in `[0.0, 1.0]`, absent until scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f32>,
}

impl Document {
    /// Relevance score, `0.0` when unscored.
    pub fn score(&self) -> f32 {
        self.relevance_score.unwrap_or(0.0)
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Documents in API order
    pub documents: Vec<Document>,

    /// Total number of matches reported by the API
    pub total_count: u64,
}

impl SearchPage {
    /// An empty page, used when a search fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Result of retrieval and reranking for one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Shortlist, sorted by relevance descending
    pub docs: Vec<Document>,

    /// Largest total-match count seen across all searches performed
    pub total_api_results: u64,

    /// Query string the shortlist was retrieved and scored with
    pub query_used: String,
}
