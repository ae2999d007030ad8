//! Terminal rendering of answers and document lists.

use infohub_core::{AppError, AppResult};
use infohub_knowledge::{Document, PipelineResult};
use serde::Serialize;

/// Characters of description shown under each source.
const PREVIEW_CHARS: usize = 200;

/// Timing line shown under an answer.
pub fn format_timing(result: &PipelineResult) -> String {
    format!(
        "ძიება: {}s | LLM: {}s | სულ: {}s",
        result.search_time, result.llm_time, result.total_time
    )
}

/// Numbered source list with type, relevance, link and a short preview.
pub fn format_sources(docs: &[Document], total_api_results: u64) -> String {
    if docs.is_empty() {
        return "წყაროები: (დოკუმენტები ვერ მოიძებნა)".to_string();
    }

    let mut lines = vec![format!(
        "წყაროები ({} დოკუმენტი, სულ API-ში: {}):",
        docs.len(),
        total_api_results
    )];

    for (i, doc) in docs.iter().enumerate() {
        let doc_type = if doc.doc_type.is_empty() {
            "-"
        } else {
            doc.doc_type.as_str()
        };

        lines.push(String::new());
        lines.push(format!("{}. {}", i + 1, doc.name));
        lines.push(format!(
            "   ტიპი: {} | რელევანტურობა: {}%",
            doc_type,
            relevance_percent(doc)
        ));
        if !doc.url.is_empty() {
            lines.push(format!("   ბმული: {}", doc.url));
        }
        if !doc.description.is_empty() {
            lines.push(format!("   {}", preview(&doc.description)));
        }
    }

    lines.join("\n")
}

/// Full human-readable rendering of a pipeline result.
pub fn format_result(result: &PipelineResult) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        result.answer,
        format_timing(result),
        format_sources(&result.docs, result.total_api_results)
    )
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn relevance_percent(doc: &Document) -> u32 {
    (doc.score() * 100.0) as u32
}

fn preview(description: &str) -> String {
    let head: String = description.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(name: &str, score: Option<f32>) -> Document {
        Document {
            name: name.to_string(),
            description: "აღწერა".to_string(),
            doc_type: "განმარტება".to_string(),
            base_type: String::new(),
            url: "https://infohub.rs.ge/ka/workspace/document/k1".to_string(),
            uuid: "k1".to_string(),
            date: String::new(),
            relevance_score: score,
        }
    }

    fn result(docs: Vec<Document>) -> PipelineResult {
        PipelineResult {
            answer: "პასუხი".to_string(),
            docs,
            total_api_results: 42,
            query_used: "დღგ".to_string(),
            search_time: 0.42,
            llm_time: 1.3,
            total_time: 1.72,
        }
    }

    #[test]
    fn test_format_timing() {
        assert_eq!(
            format_timing(&result(vec![])),
            "ძიება: 0.42s | LLM: 1.3s | სულ: 1.72s"
        );
    }

    #[test]
    fn test_format_sources() {
        let text = format_sources(&[document("დღგ", Some(0.875))], 42);

        assert!(text.starts_with("წყაროები (1 დოკუმენტი, სულ API-ში: 42):"));
        assert!(text.contains("1. დღგ"));
        assert!(text.contains("ტიპი: განმარტება | რელევანტურობა: 87%"));
        assert!(text.contains("ბმული: https://infohub.rs.ge/ka/workspace/document/k1"));
        assert!(text.contains("აღწერა..."));
    }

    #[test]
    fn test_unscored_and_untyped_document() {
        let mut doc = document("სათაური", None);
        doc.doc_type.clear();
        doc.url.clear();

        let text = format_sources(&[doc], 1);
        assert!(text.contains("ტიპი: - | რელევანტურობა: 0%"));
        assert!(!text.contains("ბმული:"));
    }

    #[test]
    fn test_preview_truncates_in_characters() {
        let long = "ა".repeat(500);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_empty_sources() {
        assert!(format_sources(&[], 0).contains("ვერ მოიძებნა"));
    }

    #[test]
    fn test_format_result_order() {
        let text = format_result(&result(vec![document("დღგ", Some(0.5))]));
        let answer = text.find("პასუხი").unwrap();
        let timing = text.find("ძიება:").unwrap();
        let sources = text.find("წყაროები").unwrap();
        assert!(answer < timing && timing < sources);
    }
}
