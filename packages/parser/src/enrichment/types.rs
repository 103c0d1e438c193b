//! Annotation value types.
//!
//! These mirror what the annotation service is asked to return. All
//! fields default so a partial response still deserializes; `raw` and
//! `error` are diagnostic tags for degraded results and never reach the
//! output document.

use serde::Deserialize;

/// Annotation for a single article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ArticleAnnotation {
    /// One-sentence summary.
    #[serde(default)]
    pub summary: String,

    /// One-sentence purpose statement.
    #[serde(default)]
    pub intention: String,

    /// Comma-separated keywords.
    #[serde(default)]
    pub keywords: String,

    /// Raw response text, kept when it could not be parsed.
    #[serde(default)]
    pub raw: Option<String>,

    /// Transport or service error message.
    #[serde(default)]
    pub error: Option<String>,
}

impl ArticleAnnotation {
    /// Empty annotation tagged with the unparseable response text.
    #[must_use]
    pub fn unparsed(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Empty annotation tagged with a request failure message.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Annotation for the document as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct DocumentAnnotation {
    /// Suggested document title; when non-empty it replaces the
    /// metadata title.
    #[serde(default)]
    pub title: String,

    /// One-sentence summary.
    #[serde(default)]
    pub summary: String,

    /// One-sentence purpose statement.
    #[serde(default)]
    pub intention: String,

    /// Comma-separated keywords.
    #[serde(default)]
    pub keywords: String,

    /// Raw response text, kept when it could not be parsed.
    #[serde(default)]
    pub raw: Option<String>,

    /// Transport or service error message.
    #[serde(default)]
    pub error: Option<String>,
}

impl DocumentAnnotation {
    /// Empty annotation tagged with the unparseable response text.
    #[must_use]
    pub fn unparsed(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Empty annotation tagged with a request failure message.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}
