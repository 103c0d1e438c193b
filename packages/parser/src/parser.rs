//! Fragment-to-document pipeline.

use tracing::{debug, info};

use crate::layout::find_column_separator;
use crate::metadata::extract_metadata;
use crate::normalize::clean_document;
use crate::segment::segment;
use crate::types::{Document, Fragment};

/// Parse positioned fragments into a structured document.
///
/// Runs layout estimation, metadata extraction, segmentation and text
/// cleanup in order. Annotation is a separate, optional step on the
/// returned document.
#[must_use]
pub fn parse_fragments(fragments: &[Fragment]) -> Document {
    info!(fragments = fragments.len(), "parsing fragments");

    let separator = find_column_separator(fragments);
    debug!(separator, "estimated column separator");

    let metadata = extract_metadata(fragments);
    let mut sections = segment(fragments, separator);
    clean_document(&mut sections);

    let mut document = Document::new(metadata.title, metadata.date);
    document.sections = sections;

    info!(
        sections = document.sections.len(),
        articles = document.article_count(),
        title = %document.title,
        "parsed document"
    );
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fragment(text: &str, x0: f64, y0: f64, page: u32) -> Fragment {
        Fragment::new(text, [x0, y0, x0 + 100.0, y0 + 12.0], page)
    }

    #[test]
    fn test_parse_two_column_document() {
        // Left column carries markers and titles, right column content.
        let fragments = vec![
            fragment("Personalreglement", 72.0, 40.0, 1),
            fragment("vom 15. März 2022", 72.0, 60.0, 1),
            fragment("I.", 72.0, 90.0, 1),
            fragment("Allgemeine Bestimmungen", 72.0, 110.0, 1),
            fragment("Art. 1", 72.0, 130.0, 1),
            fragment("Geltungsbereich", 72.0, 150.0, 1),
            fragment("Dieses Reglement gilt für alle Mitar-", 300.0, 130.0, 1),
            fragment("beitenden der Gemeinde.", 300.0, 150.0, 1),
        ];

        let document = parse_fragments(&fragments);

        assert_eq!(document.title, "Personalreglement");
        assert_eq!(document.date, "15.03.2022");
        assert_eq!(document.sections.len(), 1);

        let section = &document.sections[0];
        assert_eq!(section.title, "I. Allgemeine Bestimmungen");
        assert_eq!(section.articles.len(), 1);

        let article = &section.articles[0];
        assert_eq!(article.number, "1");
        assert_eq!(article.title, "Geltungsbereich");
        assert_eq!(
            article.content,
            "Dieses Reglement gilt für alle Mitarbeitenden der Gemeinde."
        );
    }

    #[test]
    fn test_parse_single_column_document() {
        // One column, no separator gap: every continuation is content.
        let fragments = vec![
            fragment("Verordnung über die Gebühren", 72.0, 40.0, 1),
            fragment("§ 1 Grundsatz", 72.0, 80.0, 1),
            fragment("Die Gemeinde erhebt Gebühren.", 74.0, 100.0, 1),
            fragment("§ 2 Höhe", 72.0, 120.0, 1),
            fragment("Die Höhe richtet sich nach Anhang 1.", 74.0, 140.0, 1),
        ];

        let document = parse_fragments(&fragments);

        assert_eq!(document.sections.len(), 1);
        assert_eq!(document.sections[0].title, "");
        assert_eq!(document.article_count(), 2);
        assert_eq!(
            document.sections[0].articles[0].content,
            "Die Gemeinde erhebt Gebühren."
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let document = parse_fragments(&[]);

        assert_eq!(document.title, "");
        assert_eq!(document.date, "");
        assert!(document.sections.is_empty());
        assert_eq!(document.article_count(), 0);
    }
}
