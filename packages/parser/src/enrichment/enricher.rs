//! Enrichment orchestration.
//!
//! One document-level request, then the articles of each section in
//! batches of [`ARTICLE_BATCH_SIZE`]. A failed or malformed response
//! degrades the affected annotations and processing continues; `enrich`
//! itself never fails.

use std::fs;

use tracing::{info, warn};

use crate::config::{ARTICLE_BATCH_SIZE, BATCH_MAX_TOKENS, DOCUMENT_MAX_TOKENS};
use crate::enrichment::client::AnnotationClient;
use crate::enrichment::config::EnrichmentConfig;
use crate::enrichment::prompt::{build_batch_prompt, build_document_prompt};
use crate::enrichment::response::{parse_article_batch, parse_document_annotation};
use crate::enrichment::types::{ArticleAnnotation, DocumentAnnotation};
use crate::types::Document;

/// Applies service annotations to a parsed document.
pub struct Enricher<'a, C: AnnotationClient> {
    client: &'a C,
    config: &'a EnrichmentConfig,
}

impl<'a, C: AnnotationClient> Enricher<'a, C> {
    #[must_use]
    pub fn new(client: &'a C, config: &'a EnrichmentConfig) -> Self {
        Self { client, config }
    }

    /// Annotate the document and every article in place.
    pub fn enrich(&self, document: &mut Document) {
        let full_text = document
            .sections
            .iter()
            .flat_map(|section| section.articles.iter().map(|article| article.content.as_str()))
            .collect::<Vec<_>>()
            .join("\n");

        info!("requesting document-level annotation");
        let annotation = self.annotate_document(&full_text);
        if let Some(error) = &annotation.error {
            warn!(error = %error, "document annotation degraded");
        }
        // The metadata title is only an extraction guess; a non-empty
        // suggestion from the service wins.
        if !annotation.title.is_empty() {
            document.title = annotation.title;
        }
        document.summary = Some(annotation.summary);
        document.intention = Some(annotation.intention);
        document.keywords = Some(annotation.keywords);

        for (section_index, section) in document.sections.iter_mut().enumerate() {
            for (batch_index, batch) in
                section.articles.chunks_mut(ARTICLE_BATCH_SIZE).enumerate()
            {
                let first = batch_index * ARTICLE_BATCH_SIZE + 1;
                let last = first + batch.len() - 1;
                info!(
                    section = section_index + 1,
                    first, last, "requesting article batch annotation"
                );

                let texts: Vec<String> =
                    batch.iter().map(|article| article.content.clone()).collect();
                let annotations = self.annotate_articles(&texts);

                for (article, annotation) in batch.iter_mut().zip(annotations) {
                    if let Some(error) = &annotation.error {
                        warn!(
                            article = %article.number,
                            error = %error,
                            "article annotation degraded"
                        );
                    }
                    article.summary = Some(annotation.summary);
                    article.intention = Some(annotation.intention);
                    article.keywords = Some(annotation.keywords);
                }
            }
        }

        info!("annotation complete");
    }

    /// One request covering the whole document text.
    #[must_use]
    pub fn annotate_document(&self, document_text: &str) -> DocumentAnnotation {
        let prompt = build_document_prompt(document_text);
        match self.client.complete(&prompt, DOCUMENT_MAX_TOKENS) {
            Ok(content) => {
                self.dump_response("document", &content);
                parse_document_annotation(&content)
            }
            Err(e) => {
                warn!(error = %e, "document annotation request failed");
                DocumentAnnotation::failed(e.to_string())
            }
        }
    }

    /// One request for a batch of article texts. Returns exactly one
    /// annotation per input text.
    #[must_use]
    pub fn annotate_articles(&self, article_texts: &[String]) -> Vec<ArticleAnnotation> {
        let prompt = build_batch_prompt(article_texts);
        match self.client.complete(&prompt, BATCH_MAX_TOKENS) {
            Ok(content) => {
                self.dump_response("batch", &content);
                parse_article_batch(&content, article_texts.len())
            }
            Err(e) => {
                warn!(error = %e, "batch annotation request failed");
                vec![ArticleAnnotation::failed(e.to_string()); article_texts.len()]
            }
        }
    }

    /// Write the raw response to the dump directory when one is
    /// configured. Dump failures are logged, never raised.
    fn dump_response(&self, kind: &str, content: &str) {
        let Some(dir) = &self.config.dump_dir else {
            return;
        };
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%6f");
        let path = dir.join(format!("{kind}_{timestamp}.txt"));
        match fs::create_dir_all(dir).and_then(|()| fs::write(&path, content)) {
            Ok(()) => info!(path = %path.display(), "saved raw annotation response"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to save annotation response");
            }
        }
    }
}
