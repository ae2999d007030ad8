//! RAG response types.

use crate::types::Document;
use serde::{Deserialize, Serialize};

/// Outcome of answering one question.
///
/// Always well-formed: LLM failures are reported inside `answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Answer text followed by the citation block
    pub answer: String,

    /// Documents the answer was grounded on, best first
    pub docs: Vec<Document>,

    /// Largest total-match count reported by the search API
    pub total_api_results: u64,

    /// Query string used for retrieval
    pub query_used: String,

    /// Seconds spent retrieving
    pub search_time: f64,

    /// Seconds spent in the LLM phase, including retries
    pub llm_time: f64,

    /// Seconds for the whole question
    pub total_time: f64,
}

/// Round seconds to two decimals for display.
pub(crate) fn round_secs(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}
