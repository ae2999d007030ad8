//! LLM integration crate for the InfoHub assistant.
//!
//! This crate provides a provider-agnostic abstraction over chat-completion
//! backends. Failures carry a structured [`LlmErrorKind`] so callers can tell
//! an oversized payload or a rate limit apart from everything else.
//!
//! # Providers
//! - **Groq**: OpenAI-compatible chat completions (default)
//! - **OpenAI**: same wire format, different endpoint
//!
//! # Example
//! ```no_run
//! use infohub_llm::{ChatClient, ChatMessage, ChatRequest, providers::GroqClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GroqClient::new("gsk_...")?;
//! let request = ChatRequest::new("llama-3.3-70b-versatile")
//!     .with_message(ChatMessage::user("გამარჯობა"));
//! let response = client.chat(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{ChatClient, ChatRequest, ChatResponse, LlmUsage};
pub use error::{LlmError, LlmErrorKind};
pub use factory::create_client;
pub use providers::GroqClient;
pub use types::{ChatMessage, ChatRole, ProviderType};
