//! Paragraph-aligned document chunking for the vector index.

use crate::consts::CHUNK_TARGET_CHARS;

/// Split a document into passages, merging consecutive paragraphs until a
/// passage reaches roughly `target_chars`. A single oversized paragraph stays
/// one passage; splitting mid-sentence loses more retrieval quality than an
/// occasional long chunk costs.
pub(crate) fn chunk_text(text: &str, target_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        if !current.is_empty() && current.len() + paragraph.len() + 2 > target_chars {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(paragraph);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

pub(crate) fn chunk_document(text: &str) -> Vec<String> {
    chunk_text(text, CHUNK_TARGET_CHARS)
}
