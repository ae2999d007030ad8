//! Ask command handler.
//!
//! Runs the full retrieve-and-answer pipeline for one question.

use crate::commands::output::{format_result, print_json};
use clap::Args;
use infohub_core::{config::AppConfig, AppResult};
use infohub_knowledge::AnswerPipeline;

/// Answer a question from InfoHub documents
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Output the full result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let pipeline = AnswerPipeline::from_config(config)?;

        // Fail before searching when the LLM credential is missing
        pipeline.connect().await?;

        let result = pipeline.ask(&self.question).await;

        tracing::debug!(
            query_used = %result.query_used,
            docs = result.docs.len(),
            total = result.total_api_results,
            "Pipeline result"
        );

        if self.json {
            print_json(&result)?;
        } else {
            println!("{}", format_result(&result));
        }

        Ok(())
    }
}
