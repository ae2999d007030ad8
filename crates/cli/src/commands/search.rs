//! Search command handler.
//!
//! Retrieval only: normalize, search, fall back and rerank, without the LLM.

use crate::commands::output::{format_sources, print_json};
use clap::Args;
use infohub_core::{config::AppConfig, AppResult};
use infohub_knowledge::{InfoHubClient, Retriever};
use std::sync::Arc;

/// Search and rank documents without calling the LLM
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Search question
    pub question: String,

    /// Results requested from the search API (default from config)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Documents kept after reranking (default from config)
    #[arg(short, long)]
    pub rerank_k: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing search command");

        let top_k = self.top_k.unwrap_or(config.search.top_k).max(1);
        let rerank_k = self.rerank_k.unwrap_or(config.search.rerank_k).max(1);

        let client = InfoHubClient::new(config.search.clone())?;
        let retriever = Retriever::new(Arc::new(client));

        let result = retriever.retrieve(&self.question, top_k, rerank_k).await;

        if self.json {
            print_json(&result)?;
        } else {
            println!("საძიებო მოთხოვნა: {}", result.query_used);
            println!();
            println!("{}", format_sources(&result.docs, result.total_api_results));
        }

        Ok(())
    }
}
