//! Prompt system for the InfoHub assistant.
//!
//! This crate owns the fixed prompt texts and renders the per-question user
//! message with Handlebars:
//! - the Georgian system instruction
//! - the context-grounded and bare-question user templates
//! - the citation block appended to every answer

pub mod builder;
pub mod templates;
pub mod types;

// Re-export main types
pub use builder::build_prompt;
pub use templates::{CITATION, SYSTEM_PROMPT};
pub use types::{BuiltPrompt, BuiltPromptMetadata};
