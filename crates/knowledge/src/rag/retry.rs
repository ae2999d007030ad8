//! Retry policy for LLM calls.
//!
//! Oversized prompts are retried with one document fewer; rate-limited calls
//! are retried after an exponential pause. Everything else fails at once.

use async_trait::async_trait;
use infohub_llm::{LlmError, LlmErrorKind};
use std::time::Duration;

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAction {
    /// Drop the lowest-ranked document and retry
    ShrinkContext,
    /// Wait, then retry with the same request
    Backoff(Duration),
    /// Surface the error
    GiveUp,
}

/// Retry limits for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt
    pub max_retries: u32,

    /// Base of the exponential backoff, in seconds
    pub backoff_base_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_base_secs: 2,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Pause before retrying after failed attempt `attempt` (zero-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        Duration::from_secs(self.backoff_base_secs.saturating_pow(attempt + 1))
    }

    /// Decide how to continue after attempt `attempt` failed with `error`.
    ///
    /// `docs_remaining` is the number of documents in the prompt that failed.
    pub fn decide(&self, attempt: u32, error: &LlmError, docs_remaining: usize) -> RetryAction {
        if attempt >= self.max_retries {
            return RetryAction::GiveUp;
        }

        match error.kind() {
            LlmErrorKind::PayloadTooLarge if docs_remaining > 1 => RetryAction::ShrinkContext,
            LlmErrorKind::RateLimited => RetryAction::Backoff(self.backoff_for(attempt)),
            _ => RetryAction::GiveUp,
        }
    }
}

/// Async pause, injectable so retries can be tested without waiting.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_limited() -> LlmError {
        LlmError::from_status(429, "groq API error (429): slow down")
    }

    fn too_large() -> LlmError {
        LlmError::from_status(413, "groq API error (413): request too large")
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(0), Duration::from_secs(2));
        assert_eq!(policy.backoff_for(1), Duration::from_secs(4));
        assert_eq!(policy.backoff_for(2), Duration::from_secs(8));
    }

    #[test]
    fn test_rate_limited_backs_off_until_exhausted() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.decide(0, &rate_limited(), 3),
            RetryAction::Backoff(Duration::from_secs(2))
        );
        assert_eq!(
            policy.decide(1, &rate_limited(), 3),
            RetryAction::Backoff(Duration::from_secs(4))
        );
        assert_eq!(policy.decide(2, &rate_limited(), 3), RetryAction::GiveUp);
    }

    #[test]
    fn test_payload_too_large_shrinks_while_docs_remain() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.decide(0, &too_large(), 3), RetryAction::ShrinkContext);
        assert_eq!(policy.decide(1, &too_large(), 2), RetryAction::ShrinkContext);
        assert_eq!(policy.decide(2, &too_large(), 2), RetryAction::GiveUp);
    }

    #[test]
    fn test_payload_too_large_with_last_doc_gives_up() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.decide(0, &too_large(), 1), RetryAction::GiveUp);
        assert_eq!(policy.decide(0, &too_large(), 0), RetryAction::GiveUp);
    }

    #[test]
    fn test_other_errors_never_retried() {
        let policy = RetryPolicy::default();
        let error = LlmError::from_status(500, "groq API error (500): boom");
        assert_eq!(policy.decide(0, &error, 5), RetryAction::GiveUp);
    }

    #[test]
    fn test_unclassified_error_uses_message() {
        let policy = RetryPolicy::default();
        let error = LlmError::unclassified("Error code: 429 - rate limit reached");
        assert_eq!(
            policy.decide(0, &error, 1),
            RetryAction::Backoff(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_zero_retries() {
        let policy = RetryPolicy::new(0);
        assert_eq!(policy.decide(0, &rate_limited(), 3), RetryAction::GiveUp);
    }
}
