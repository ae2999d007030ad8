//! Retrieval orchestration: normalize, search, fall back, merge, rerank.

use crate::query::{expand_abbreviation, expand_query, normalize_query};
use crate::ranking::rerank;
use crate::search::DocumentSearch;
use crate::types::{Document, RetrievalResult};
use std::collections::HashSet;
use std::sync::Arc;

/// Drives the search backend for one question at a time.
#[derive(Clone)]
pub struct Retriever {
    search: Arc<dyn DocumentSearch>,
}

impl Retriever {
    pub fn new(search: Arc<dyn DocumentSearch>) -> Self {
        Self { search }
    }

    /// Retrieve and rerank documents for a question.
    ///
    /// 1. Normalize the question and search with it.
    /// 2. If nothing came back, try each abbreviation-expanded variant until
    ///    one returns documents; that variant becomes the query used.
    /// 3. A query that is a single abbreviation is additionally searched in
    ///    its full form, merging new documents by uuid.
    /// 4. Score, stable-sort and truncate to `rerank_k`.
    ///
    /// Empty results are a valid outcome; this never fails.
    #[tracing::instrument(skip(self), fields(query_used = tracing::field::Empty))]
    pub async fn retrieve(&self, question: &str, top_k: usize, rerank_k: usize) -> RetrievalResult {
        let mut query_used = normalize_query(question);

        let page = self.search.search(&query_used, top_k).await;
        let mut total_count = page.total_count;
        let mut docs = page.documents;

        if docs.is_empty() {
            for variant in expand_query(&query_used).into_iter().skip(1) {
                tracing::debug!(variant = %variant, "Trying expanded query");
                let page = self.search.search(&variant, top_k).await;
                total_count = total_count.max(page.total_count);

                if !page.is_empty() {
                    docs = page.documents;
                    query_used = variant;
                    break;
                }
            }
        }

        if let Some(full) = single_abbreviation(&query_used) {
            tracing::debug!(expansion = full, "Augmenting abbreviation query");
            let page = self.search.search(full, top_k).await;
            total_count = total_count.max(page.total_count);
            merge_unique(&mut docs, page.documents);
        }

        let candidates = docs.len();
        let docs = rerank(&query_used, docs, rerank_k);

        tracing::Span::current().record("query_used", query_used.as_str());
        tracing::info!(
            candidates,
            kept = docs.len(),
            total = total_count,
            "Retrieval finished"
        );

        RetrievalResult {
            docs,
            total_api_results: total_count,
            query_used,
        }
    }
}

/// Full phrase for a query consisting of exactly one abbreviation.
fn single_abbreviation(query: &str) -> Option<&'static str> {
    let mut words = query.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => expand_abbreviation(word),
        _ => None,
    }
}

/// Append documents whose uuid has not been seen yet.
fn merge_unique(docs: &mut Vec<Document>, extra: Vec<Document>) {
    let mut seen: HashSet<String> = docs.iter().map(|d| d.uuid.clone()).collect();
    for doc in extra {
        if seen.insert(doc.uuid.clone()) {
            docs.push(doc);
        }
    }
}
