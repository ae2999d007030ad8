//! Keyword-overlap reranking.
//!
//! The search API's own ordering is coarse, so results are rescored by the
//! share of query words they contain, with title matches weighted higher.

use crate::query::expand_abbreviation;
use crate::types::Document;
use std::collections::HashSet;

/// Extra weight for query words that appear in the document name.
const NAME_MATCH_BONUS: f32 = 0.2;

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Score a document against a query, in `[0.0, 1.0]`.
///
/// Abbreviations in the query contribute the words of their full phrase, so a
/// bare "დღგ" still matches documents that spell the term out.
pub fn score_relevance(query: &str, doc: &Document) -> f32 {
    let mut query_words = word_set(query);

    let expanded: Vec<String> = query_words
        .iter()
        .filter_map(|word| expand_abbreviation(word))
        .flat_map(word_set)
        .collect();
    query_words.extend(expanded);

    if query_words.is_empty() {
        return 0.0;
    }

    let total = query_words.len() as f32;
    let doc_words = word_set(&format!("{} {}", doc.name, doc.description));
    let name_words = word_set(&doc.name);

    let overlap = query_words.intersection(&doc_words).count() as f32;
    let name_overlap = query_words.intersection(&name_words).count() as f32;

    let score = overlap / total + NAME_MATCH_BONUS * (name_overlap / total);
    score.min(1.0)
}

/// Score every document, sort by score descending and keep the top `limit`.
///
/// The sort is stable, so equally scored documents keep their retrieval order.
pub fn rerank(query: &str, mut docs: Vec<Document>, limit: usize) -> Vec<Document> {
    for doc in &mut docs {
        doc.relevance_score = Some(score_relevance(query, doc));
    }

    docs.sort_by(|a, b| b.score().total_cmp(&a.score()));
    docs.truncate(limit);
    docs
}
