//! LLM provider factory.
//!
//! Resolves the provider from configuration, checks the credential and builds
//! the concrete client.

use crate::client::ChatClient;
use crate::providers::GroqClient;
use crate::types::ProviderType;
use infohub_core::{AppError, AppResult, LlmSettings};
use std::sync::Arc;
use std::time::Duration;

/// Create a chat client from LLM settings.
///
/// # Arguments
/// * `settings` - Provider, endpoint and timeout configuration
/// * `api_key` - Credential resolved from `settings.api_key_env`
///
/// # Errors
/// Returns `AppError::Config` if the provider is unknown or the credential
/// is missing. This is the fail-fast path for a misconfigured deployment.
pub fn create_client(
    settings: &LlmSettings,
    api_key: Option<&str>,
) -> AppResult<Arc<dyn ChatClient>> {
    let provider = ProviderType::parse(&settings.provider)
        .ok_or_else(|| AppError::Config(format!("Unknown provider: {}", settings.provider)))?;

    let api_key = api_key.filter(|key| !key.trim().is_empty()).ok_or_else(|| {
        AppError::Config(format!(
            "{} not set. Create a .env file with your key.",
            settings.api_key_env
        ))
    })?;

    let endpoint = settings
        .endpoint
        .as_deref()
        .unwrap_or_else(|| provider.default_endpoint());

    tracing::debug!(
        provider = provider.as_str(),
        endpoint,
        timeout_secs = settings.timeout_secs,
        "Creating chat client"
    );

    let client = GroqClient::with_options(
        provider,
        endpoint,
        api_key,
        Duration::from_secs(settings.timeout_secs),
    )?;

    Ok(Arc::new(client))
}
