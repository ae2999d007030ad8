//! Structured LLM errors.
//!
//! Providers classify failures by HTTP status. Errors raised before a status
//! is known (transport failures, SDK-style wrapped errors) are `Unknown`, and
//! [`LlmError::kind`] falls back to scanning the message for "413"/"429".

use infohub_core::AppError;
use thiserror::Error;

/// Failure category that drives the caller's retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// HTTP 413: the prompt is too large for the provider
    PayloadTooLarge,
    /// HTTP 429: rate limited
    RateLimited,
    /// Any other failure; never retried
    Other,
    /// No status available; classified from the message text
    Unknown,
}

/// Error returned by a [`crate::ChatClient`].
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct LlmError {
    kind: LlmErrorKind,
    status: Option<u16>,
    message: String,
}

impl LlmError {
    /// Build an error from an HTTP status code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            413 => LlmErrorKind::PayloadTooLarge,
            429 => LlmErrorKind::RateLimited,
            _ => LlmErrorKind::Other,
        };

        Self {
            kind,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Build an error with an explicit kind.
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
        }
    }

    /// Build an error whose kind is not known.
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Unknown, message)
    }

    /// HTTP status, when the provider returned one.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Effective kind of this error.
    ///
    /// Never returns `Unknown`: unclassified errors are resolved by a
    /// substring match on the message, defaulting to `Other`.
    pub fn kind(&self) -> LlmErrorKind {
        match self.kind {
            LlmErrorKind::Unknown if self.message.contains("413") => {
                LlmErrorKind::PayloadTooLarge
            }
            LlmErrorKind::Unknown if self.message.contains("429") => LlmErrorKind::RateLimited,
            LlmErrorKind::Unknown => LlmErrorKind::Other,
            kind => kind,
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::Llm(err.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            LlmError::from_status(413, "too big").kind(),
            LlmErrorKind::PayloadTooLarge
        );
        assert_eq!(
            LlmError::from_status(429, "slow down").kind(),
            LlmErrorKind::RateLimited
        );
        assert_eq!(
            LlmError::from_status(500, "boom").kind(),
            LlmErrorKind::Other
        );
    }

    #[test]
    fn test_structured_kind_wins_over_message() {
        // A 500 whose body happens to mention 429 is still not retried
        let err = LlmError::from_status(500, "upstream returned 429");
        assert_eq!(err.kind(), LlmErrorKind::Other);
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_unclassified_substring_fallback() {
        assert_eq!(
            LlmError::unclassified("Error code: 413 - request too large").kind(),
            LlmErrorKind::PayloadTooLarge
        );
        assert_eq!(
            LlmError::unclassified("Error code: 429 - rate_limit_exceeded").kind(),
            LlmErrorKind::RateLimited
        );
        assert_eq!(
            LlmError::unclassified("connection reset").kind(),
            LlmErrorKind::Other
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = LlmError::from_status(401, "invalid api key").into();
        assert_eq!(err.to_string(), "LLM error: invalid api key");
    }
}
