mod client;
mod config;
mod enricher;
mod prompt;
mod response;
mod types;

pub use client::{AnnotationClient, OpenRouterClient};
#[cfg(any(test, feature = "test-utils"))]
pub use client::test_support::MockAnnotationClient;
pub use config::{EnrichmentConfig, EnrichmentConfigBuilder};
pub use enricher::Enricher;
pub use response::{parse_article_batch, parse_document_annotation, strip_code_fences};
pub use types::{ArticleAnnotation, DocumentAnnotation};
