//! Command handlers for the InfoHub CLI.

pub mod ask;
pub mod chat;
pub mod output;
pub mod search;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use search::SearchCommand;
