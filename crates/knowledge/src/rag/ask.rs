//! Answer orchestration.
//!
//! Retrieves documents for a question, builds the prompt and asks the LLM,
//! shrinking the context or backing off when the provider pushes back.

use crate::context::build_context;
use crate::rag::retry::{RetryAction, RetryPolicy, Sleeper, TokioSleeper};
use crate::rag::types::{round_secs, PipelineResult};
use crate::retriever::Retriever;
use crate::search::{DocumentSearch, InfoHubClient};
use crate::types::Document;
use infohub_core::{AppConfig, AppError, AppResult, ContextSettings, LlmSettings};
use infohub_llm::{create_client, ChatClient, ChatMessage, ChatRequest};
use infohub_prompt::{build_prompt, CITATION};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

/// Prefix of the answer text when the LLM phase fails.
pub const LLM_ERROR_PREFIX: &str = "შეცდომა LLM API-სთან დაკავშირებისას";

/// Question-answering pipeline over the InfoHub search API.
///
/// The chat client is created on first use and reused for every later
/// question. Construction never needs the credential; a missing key surfaces
/// as an error answer.
pub struct AnswerPipeline {
    retriever: Retriever,
    llm: LlmSettings,
    api_key: Option<String>,
    client: OnceCell<Arc<dyn ChatClient>>,
    context: ContextSettings,
    top_k: usize,
    rerank_k: usize,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl AnswerPipeline {
    /// Build a pipeline backed by the live InfoHub API.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let search = InfoHubClient::new(config.search.clone())?;
        Ok(Self::new(Arc::new(search), config, config.resolve_api_key()))
    }

    /// Build a pipeline over an arbitrary search backend.
    pub fn new(
        search: Arc<dyn DocumentSearch>,
        config: &AppConfig,
        api_key: Option<String>,
    ) -> Self {
        Self {
            retriever: Retriever::new(search),
            llm: config.llm.clone(),
            api_key,
            client: OnceCell::new(),
            context: config.context.clone(),
            top_k: config.search.top_k,
            rerank_k: config.search.rerank_k,
            retry: RetryPolicy::new(config.llm.max_retries),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Use an already constructed chat client.
    pub fn with_client(mut self, client: Arc<dyn ChatClient>) -> Self {
        self.client = OnceCell::new_with(Some(client));
        self
    }

    /// Replace the backoff sleeper.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Retriever used by this pipeline, for retrieval-only callers.
    pub fn retriever(&self) -> &Retriever {
        &self.retriever
    }

    /// Answer a question.
    ///
    /// Always returns a result: LLM failures that survive the retry policy
    /// become an error answer. The citation block is appended either way.
    #[tracing::instrument(skip(self))]
    pub async fn ask(&self, question: &str) -> PipelineResult {
        let started = Instant::now();

        let retrieval = self
            .retriever
            .retrieve(question, self.top_k, self.rerank_k)
            .await;
        let search_time = started.elapsed();

        let llm_started = Instant::now();
        let mut docs = retrieval.docs;
        let answer = match self.generate(question, &mut docs).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "LLM phase failed");
                format!("{}: {}", LLM_ERROR_PREFIX, describe(&e))
            }
        };
        let llm_time = llm_started.elapsed();
        let total_time = started.elapsed();

        tracing::info!(
            docs = docs.len(),
            search_secs = search_time.as_secs_f64(),
            llm_secs = llm_time.as_secs_f64(),
            "Answered question"
        );

        PipelineResult {
            answer: format!("{}\n\n{}", answer, CITATION),
            docs,
            total_api_results: retrieval.total_api_results,
            query_used: retrieval.query_used,
            search_time: round_secs(search_time.as_secs_f64()),
            llm_time: round_secs(llm_time.as_secs_f64()),
            total_time: round_secs(total_time.as_secs_f64()),
        }
    }

    /// Create the chat client now instead of on the first question.
    ///
    /// Fails with `AppError::Config` when the credential is missing.
    pub async fn connect(&self) -> AppResult<()> {
        self.client().await.map(|_| ())
    }

    async fn client(&self) -> AppResult<&Arc<dyn ChatClient>> {
        self.client
            .get_or_try_init(|| async { create_client(&self.llm, self.api_key.as_deref()) })
            .await
    }

    /// Call the LLM, applying the retry policy.
    ///
    /// `docs` loses its lowest-ranked entries when the prompt is too large,
    /// so afterwards it holds the documents the last attempt was built from.
    async fn generate(&self, question: &str, docs: &mut Vec<Document>) -> AppResult<String> {
        let client = self.client().await?;
        let mut attempt = 0;

        loop {
            let request = self.build_request(question, docs)?;

            let error = match client.chat(&request).await {
                Ok(response) => return Ok(response.content),
                Err(e) => e,
            };

            match self.retry.decide(attempt, &error, docs.len()) {
                RetryAction::ShrinkContext => {
                    docs.pop();
                    tracing::warn!(
                        attempt,
                        docs = docs.len(),
                        "Prompt too large, dropping a document"
                    );
                }
                RetryAction::Backoff(pause) => {
                    tracing::warn!(
                        attempt,
                        pause_secs = pause.as_secs(),
                        "Rate limited, backing off"
                    );
                    self.sleeper.sleep(pause).await;
                }
                RetryAction::GiveUp => return Err(error.into()),
            }

            attempt += 1;
        }
    }

    fn build_request(&self, question: &str, docs: &[Document]) -> AppResult<ChatRequest> {
        let context = build_context(
            docs,
            self.context.max_chars,
            self.context.max_description_chars,
        );
        let prompt = build_prompt(question, Some(&context))?;

        Ok(ChatRequest::new(&self.llm.model)
            .with_message(ChatMessage::system(prompt.system))
            .with_message(ChatMessage::user(prompt.user)))
    }
}

/// Error text shown to the user.
fn describe(error: &AppError) -> String {
    match error {
        AppError::Llm(message) => message.clone(),
        other => other.to_string(),
    }
}
