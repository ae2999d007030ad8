//! Document retrieval and answering over the InfoHub knowledge base.
//!
//! Questions are normalized, searched against the remote InfoHub API with
//! abbreviation-aware fallbacks, reranked by keyword overlap and packed into
//! an LLM prompt. [`AnswerPipeline`] ties these steps together.

pub mod context;
pub mod query;
pub mod rag;
pub mod ranking;
pub mod retriever;
pub mod search;
pub mod types;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use context::build_context;
pub use query::{expand_query, normalize_query};
pub use rag::{AnswerPipeline, PipelineResult, RetryPolicy, Sleeper, TokioSleeper};
pub use ranking::{rerank, score_relevance};
pub use retriever::Retriever;
pub use search::{DocumentSearch, InfoHubClient};
pub use types::{Document, RetrievalResult, SearchPage};
