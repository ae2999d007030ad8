//! Question-to-answer scenarios over mocked search and chat backends.

use crate::rag::AnswerPipeline;
use crate::testing::{doc, MockSearch, RecordingSleeper, ScriptedChat};
use crate::types::SearchPage;
use infohub_core::AppConfig;
use infohub_prompt::CITATION;
use std::sync::Arc;

const VAT: &str = "დამატებული ღირებულების გადასახადი";

fn page(docs: Vec<crate::types::Document>, total_count: u64) -> SearchPage {
    SearchPage {
        documents: docs,
        total_count,
    }
}

fn pipeline(search: Arc<MockSearch>, chat: Arc<ScriptedChat>) -> AnswerPipeline {
    AnswerPipeline::new(search, &AppConfig::default(), None)
        .with_client(chat)
        .with_sleeper(Arc::new(RecordingSleeper::default()))
}

#[tokio::test]
async fn test_abbreviation_question_is_augmented_with_full_phrase() {
    let search = Arc::new(
        MockSearch::new()
            .with_page("დღგ", page(vec![doc("a", "დღგ-ის ზოგადი წესი", "")], 4))
            .with_page(
                VAT,
                page(
                    vec![
                        doc("a", "დღგ-ის ზოგადი წესი", ""),
                        doc("b", VAT, "განმარტება"),
                    ],
                    12,
                ),
            ),
    );
    let chat = Arc::new(ScriptedChat::answering("დღგ არის არაპირდაპირი გადასახადი."));

    let result = pipeline(search.clone(), chat.clone())
        .ask("რა არის დღგ?")
        .await;

    // Literal search already found something, augmentation still runs
    assert_eq!(search.queries(), vec!["დღგ", VAT]);
    assert_eq!(result.query_used, "დღგ");
    assert_eq!(result.total_api_results, 12);
    assert_eq!(result.docs.len(), 2);
    assert_eq!(result.docs[0].uuid, "b");

    let user = &chat.requests()[0].messages[1].content;
    assert!(user.contains("შეკითხვა: რა არის დღგ?"));
    assert!(user.contains(&format!("[დოკუმენტი 1: {}]", VAT)));
    assert!(result.answer.ends_with(CITATION));
}

#[tokio::test]
async fn test_expanded_variant_becomes_query_used() {
    let expanded = format!("{} განაკვეთი", VAT);
    let search = Arc::new(MockSearch::new().with_page(
        &expanded,
        page(vec![doc("r", "დღგ-ის განაკვეთი", "18 პროცენტი")], 3),
    ));
    let chat = Arc::new(ScriptedChat::answering("18%"));

    let result = pipeline(search.clone(), chat).ask("დღგ განაკვეთი").await;

    assert_eq!(search.queries(), vec!["დღგ განაკვეთი".to_string(), expanded.clone()]);
    assert_eq!(result.query_used, expanded);
    assert_eq!(result.total_api_results, 3);
    assert_eq!(result.docs.len(), 1);
}

#[tokio::test]
async fn test_nothing_found_still_answers_with_citation() {
    let search = Arc::new(MockSearch::new());
    let chat = Arc::new(ScriptedChat::answering("ზოგადი პასუხი"));

    let result = pipeline(search.clone(), chat.clone())
        .ask("იმპ წესები")
        .await;

    // Literal query plus both expansion variants
    assert_eq!(
        search.queries(),
        vec!["იმპ წესები", "იმპორტი წესები", "იმპ წესები იმპორტი"]
    );
    assert!(result.docs.is_empty());
    assert_eq!(result.total_api_results, 0);
    assert_eq!(result.query_used, "იმპ წესები");
    assert_eq!(result.answer, format!("ზოგადი პასუხი\n\n{}", CITATION));
    assert_eq!(chat.requests()[0].messages[1].content, "შეკითხვა: იმპ წესები");
}
