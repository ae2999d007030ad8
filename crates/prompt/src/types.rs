//! Prompt types for the InfoHub assistant.

use serde::{Deserialize, Serialize};

/// A fully built prompt ready for LLM execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltPrompt {
    /// System message
    pub system: String,

    /// User message
    pub user: String,

    /// Metadata about the built prompt
    pub metadata: BuiltPromptMetadata,
}

/// Metadata about a built prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltPromptMetadata {
    /// Whether a document context section was rendered
    #[serde(rename = "contextIncluded")]
    pub context_included: bool,

    /// Characters of context included
    #[serde(rename = "contextChars")]
    pub context_chars: usize,
}

impl BuiltPrompt {
    /// Create a new built prompt.
    pub fn new(system: String, user: String, context_chars: Option<usize>) -> Self {
        Self {
            system,
            user,
            metadata: BuiltPromptMetadata {
                context_included: context_chars.is_some(),
                context_chars: context_chars.unwrap_or(0),
            },
        }
    }
}
