//! Context assembly for the LLM prompt.

use crate::types::Document;

/// Separator placed between document blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Serialize ranked documents into a character-budgeted context block.
///
/// Blocks are added in order until the next one would push the total past
/// `max_chars`. The first block is always included, even when it alone is
/// over budget. Blocks are never cut mid-way; only each description is capped
/// at `max_description_chars`. Lengths are counted in characters, not bytes.
pub fn build_context(docs: &[Document], max_chars: usize, max_description_chars: usize) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut chars_used = 0;

    for (i, doc) in docs.iter().enumerate() {
        let block = document_block(i + 1, doc, max_description_chars);
        let block_chars = block.chars().count();

        if chars_used + block_chars > max_chars && !blocks.is_empty() {
            tracing::debug!(
                included = blocks.len(),
                skipped = docs.len() - i,
                chars_used,
                "Context budget reached"
            );
            break;
        }

        blocks.push(block);
        chars_used += block_chars;
    }

    blocks.join(BLOCK_SEPARATOR)
}

fn document_block(position: usize, doc: &Document, max_description_chars: usize) -> String {
    let mut lines = vec![format!("[დოკუმენტი {}: {}]", position, doc.name)];

    if !doc.doc_type.is_empty() {
        lines.push(format!("ტიპი: {}", doc.doc_type));
    }

    if !doc.url.is_empty() {
        lines.push(format!("ბმული: {}", doc.url));
    }

    if !doc.description.is_empty() {
        lines.push(doc.description.chars().take(max_description_chars).collect());
    }

    lines.join("\n")
}
