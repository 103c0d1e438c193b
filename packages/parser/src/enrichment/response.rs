//! Annotation response normalization.
//!
//! The service is asked for strict JSON but does not always comply:
//! markdown code fences, arrays of JSON-encoded strings, or a bare
//! object where an array was requested all occur in practice. The
//! functions here repair what they can, tag what they cannot, and
//! always hand back exactly one annotation per requested item.

use serde_json::Value;
use tracing::warn;

use crate::enrichment::types::{ArticleAnnotation, DocumentAnnotation};

/// Remove a leading and trailing markdown code fence, if present.
#[must_use]
pub fn strip_code_fences(content: &str) -> String {
    let trimmed = content.trim();
    // Longest markers first so "```json" is not half-eaten by "```"
    let without_leading = ["```json", "```python", "```"]
        .iter()
        .find_map(|fence| strip_prefix_ignore_case(trimmed, fence))
        .unwrap_or(trimmed);
    let trimmed = without_leading.trim();
    let without_trailing = trimmed.strip_suffix("```").unwrap_or(trimmed);
    without_trailing.trim().to_string()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

/// Parse a batch response into exactly `expected` annotations.
///
/// Handles, in order: an array of objects, an array of JSON-encoded
/// strings, a bare object (wrapped as a one-element batch). Anything
/// else becomes `expected` copies of an annotation tagged with the raw
/// content. The result length is forced to `expected` afterwards.
#[must_use]
pub fn parse_article_batch(content: &str, expected: usize) -> Vec<ArticleAnnotation> {
    let stripped = strip_code_fences(content);

    let annotations = match serde_json::from_str::<Value>(&stripped) {
        Ok(Value::Array(items)) => parse_batch_array(items, &stripped, expected),
        Ok(value @ Value::Object(_)) => vec![annotation_from_value(value)],
        _ => {
            warn!("batch response is not valid JSON");
            vec![ArticleAnnotation::unparsed(&stripped); expected]
        }
    };

    force_batch_len(annotations, expected)
}

fn parse_batch_array(items: Vec<Value>, raw: &str, expected: usize) -> Vec<ArticleAnnotation> {
    if items.iter().all(Value::is_object) {
        return items.into_iter().map(annotation_from_value).collect();
    }

    if items.iter().all(Value::is_string) {
        return items
            .into_iter()
            .map(|item| {
                let text = item.as_str().unwrap_or_default();
                match serde_json::from_str::<ArticleAnnotation>(text) {
                    Ok(annotation) => annotation,
                    Err(_) => {
                        warn!(element = %text, "unparseable batch array element");
                        ArticleAnnotation::unparsed(text)
                    }
                }
            })
            .collect();
    }

    warn!("batch response array mixes objects and other values");
    vec![ArticleAnnotation::unparsed(raw); expected]
}

fn annotation_from_value(value: Value) -> ArticleAnnotation {
    serde_json::from_value(value.clone())
        .unwrap_or_else(|_| ArticleAnnotation::unparsed(value.to_string()))
}

/// Truncate or pad so callers can always zip against their request.
fn force_batch_len(
    mut annotations: Vec<ArticleAnnotation>,
    expected: usize,
) -> Vec<ArticleAnnotation> {
    if annotations.len() != expected {
        warn!(
            received = annotations.len(),
            expected, "annotation count does not match request"
        );
        annotations.resize_with(expected, || {
            ArticleAnnotation::failed("annotation count mismatch")
        });
    }
    annotations
}

/// Parse the document-level response.
///
/// A response that is not a JSON object degrades to an annotation
/// carrying the raw content, never an error.
#[must_use]
pub fn parse_document_annotation(content: &str) -> DocumentAnnotation {
    let stripped = strip_code_fences(content);
    match serde_json::from_str::<DocumentAnnotation>(&stripped) {
        Ok(annotation) => annotation,
        Err(_) => {
            warn!("unparseable document response");
            DocumentAnnotation::unparsed(stripped)
        }
    }
}
