//! InfoHub document search client.
//!
//! One GET per query against `/documents/search`. Failures are absorbed:
//! a search outage degrades to "no documents found" instead of aborting the
//! question.

use crate::types::{Document, SearchPage};
use infohub_core::{AppError, AppResult, SearchSettings};
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER};
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Duration;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// A backend that can search for documents.
///
/// Implementations never fail: errors are logged and reported as an empty page.
#[async_trait::async_trait]
pub trait DocumentSearch: Send + Sync {
    /// Search for `query`, returning at most `take` documents.
    async fn search(&self, query: &str, take: usize) -> SearchPage;
}

/// Search API response format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    total_count: Option<u64>,
    #[serde(default)]
    data: Option<Vec<RawDocument>>,
}

/// A document record as returned by the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    additional_description: Option<String>,
    #[serde(default, rename = "type")]
    doc_type: Option<NamedRef>,
    #[serde(default)]
    base_type: Option<NamedRef>,
    #[serde(default)]
    unique_key: Option<String>,
    #[serde(default)]
    receipt_date: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    #[serde(default)]
    name: Option<String>,
}

/// HTTP client for the InfoHub search API.
pub struct InfoHubClient {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl InfoHubClient {
    /// Create a client with the configured headers and timeout.
    pub fn new(settings: SearchSettings) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            "languagecode",
            HeaderValue::from_str(&settings.language_code)
                .map_err(|e| AppError::Config(format!("Invalid language code header: {}", e)))?,
        );
        headers.insert(
            REFERER,
            HeaderValue::from_str(&settings.referer)
                .map_err(|e| AppError::Config(format!("Invalid referer header: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AppError::Search(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { settings, client })
    }

    /// Perform one search request, surfacing every failure.
    pub async fn fetch(&self, query: &str, take: usize) -> AppResult<SearchPage> {
        let take = take.to_string();
        let params = search_params(query, &take);

        let response = self
            .client
            .get(self.settings.search_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Search(format!("API returned {}", status)));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("Failed to parse response: {}", e)))?;

        Ok(self.convert_response(body))
    }

    fn convert_response(&self, body: SearchResponse) -> SearchPage {
        let documents = body
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|raw| self.convert_document(raw))
            .collect();

        SearchPage {
            documents,
            total_count: body.total_count.unwrap_or(0),
        }
    }

    fn convert_document(&self, raw: RawDocument) -> Document {
        let uuid = raw.unique_key.unwrap_or_default();
        let url = if uuid.is_empty() {
            String::new()
        } else {
            self.settings.document_url(&uuid)
        };

        let date = match raw.receipt_date {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Document {
            name: raw.name.unwrap_or_default(),
            description: strip_html(raw.additional_description.as_deref().unwrap_or("")),
            doc_type: raw.doc_type.and_then(|t| t.name).unwrap_or_default(),
            base_type: raw.base_type.and_then(|t| t.name).unwrap_or_default(),
            url,
            uuid,
            date,
            relevance_score: None,
        }
    }
}

#[async_trait::async_trait]
impl DocumentSearch for InfoHubClient {
    async fn search(&self, query: &str, take: usize) -> SearchPage {
        tracing::debug!(query, take, "Searching InfoHub");

        match self.fetch(query, take).await {
            Ok(page) => {
                tracing::info!(
                    query,
                    returned = page.documents.len(),
                    total = page.total_count,
                    "InfoHub search completed"
                );
                page
            }
            Err(e) => {
                tracing::warn!(query, "InfoHub search failed: {}", e);
                SearchPage::empty()
            }
        }
    }
}

/// Fixed query parameters of the search endpoint.
fn search_params<'a>(query: &'a str, take: &'a str) -> [(&'static str, &'a str); 9] {
    [
        ("q", query),
        ("AISearch", "false"),
        ("searchInName", "true"),
        ("searchInText", "true"),
        ("searchType", "3"),
        ("searchForm", "false"),
        ("skip", "0"),
        ("take", take),
        ("searchInAllSubTypes", "false"),
    ]
}

/// Remove HTML tags and `&nbsp;`, collapse whitespace and trim.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = HTML_TAG.replace_all(html, " ");
    let text = text.replace("&nbsp;", " ");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}
