//! RAG (Retrieval-Augmented Generation) answering.
//!
//! Retrieves InfoHub documents for a question, packs them into the prompt and
//! synthesizes an answer with the configured LLM.

pub mod ask;
pub mod retry;
pub mod types;

pub use ask::AnswerPipeline;
pub use retry::{RetryAction, RetryPolicy, Sleeper, TokioSleeper};
pub use types::PipelineResult;
