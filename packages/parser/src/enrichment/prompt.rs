//! Prompt construction for annotation requests.
//!
//! The instruction texts live in `prompts/` and define the response
//! contract the normalizer in [`crate::enrichment::response`] repairs
//! against. Keep them in sync.

const BATCH_INSTRUCTIONS: &str = include_str!("../../prompts/batch_annotation.txt");
const DOCUMENT_INSTRUCTIONS: &str = include_str!("../../prompts/document_annotation.txt");

/// Build the user prompt for annotating a batch of articles.
///
/// Articles are numbered in request order so positional responses can
/// be zipped back onto their articles.
#[must_use]
pub fn build_batch_prompt(article_texts: &[String]) -> String {
    let mut prompt = String::from(BATCH_INSTRUCTIONS);
    for (i, text) in article_texts.iter().enumerate() {
        prompt.push_str(&format!("Artikel {}:\n{}\n", i + 1, text));
    }
    prompt
}

/// Build the user prompt for annotating the document as a whole.
#[must_use]
pub fn build_document_prompt(document_text: &str) -> String {
    let mut prompt = String::from(DOCUMENT_INSTRUCTIONS);
    prompt.push_str(document_text);
    prompt.push('\n');
    prompt
}
