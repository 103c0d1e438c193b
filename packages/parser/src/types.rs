//! Core data types for the parser.
//!
//! These types describe both ends of the pipeline: the positioned text
//! fragments an extraction tool hands us, and the segmented document we
//! hand back. Serde field order on the output types is the JSON field
//! order.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a text fragment, in layout units.
///
/// Serialized as the 4-element array `[x0, y0, x1, y1]` that extraction
/// tools emit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    /// Left edge.
    pub x0: f64,
    /// Top edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y1: f64,
}

impl From<[f64; 4]> for BBox {
    fn from(coords: [f64; 4]) -> Self {
        Self {
            x0: coords[0],
            y0: coords[1],
            x1: coords[2],
            y1: coords[3],
        }
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        [bbox.x0, bbox.y0, bbox.x1, bbox.y1]
    }
}

/// A single positioned run of text from the extraction stage.
///
/// Fragments arrive in extraction order (page by page, top to bottom
/// within a page as the extractor walked it) and are never re-sorted for
/// segmentation. Only metadata extraction sorts a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Raw text, exactly as extracted.
    pub text: String,

    /// Position on the page.
    pub bbox: BBox,

    /// Zero-based page index.
    pub page: u32,

    /// Font name reported by the extractor.
    #[serde(default)]
    pub font: String,

    /// Font size in points.
    #[serde(default)]
    pub size: f64,

    /// Extractor-specific style flags (bold, italic, ...).
    #[serde(default)]
    pub flags: u32,
}

impl Fragment {
    /// Create a fragment without font metadata.
    #[must_use]
    pub fn new(text: impl Into<String>, bbox: impl Into<BBox>, page: u32) -> Self {
        Self {
            text: text.into(),
            bbox: bbox.into(),
            page,
            font: String::new(),
            size: 0.0,
            flags: 0,
        }
    }
}

/// A numbered article within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Number captured from the article marker (e.g. "7").
    pub number: String,

    /// Heading text.
    pub title: String,

    /// Body text.
    pub content: String,

    /// One-sentence summary from the annotation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Purpose statement from the annotation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intention: Option<String>,

    /// Comma-separated keywords from the annotation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl Article {
    /// Create a new article without annotations.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            content: content.into(),
            summary: None,
            intention: None,
            keywords: None,
        }
    }
}

/// A top-level structural unit headed by a roman-numeral marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text (e.g. "I. Allgemeine Bestimmungen"). Empty for the
    /// implicit section that absorbs articles preceding any heading.
    pub title: String,

    /// Articles in encounter order.
    pub articles: Vec<Article>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            articles: Vec::new(),
        }
    }

    /// Append an article to the section.
    pub fn add_article(&mut self, article: Article) {
        self.articles.push(article);
    }
}

/// Complete segmented document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title (metadata guess, possibly replaced by annotation).
    pub title: String,

    /// Issuance date formatted DD.MM.YYYY; empty when none was found.
    pub date: String,

    /// Document-level summary from the annotation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Document-level purpose statement from the annotation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intention: Option<String>,

    /// Document-level keywords from the annotation pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Sections in encounter order.
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a document without sections or annotations.
    #[must_use]
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            summary: None,
            intention: None,
            keywords: None,
            sections: Vec::new(),
        }
    }

    /// Total number of articles across all sections.
    #[must_use]
    pub fn article_count(&self) -> usize {
        self.sections.iter().map(|s| s.articles.len()).sum()
    }
}

/// Document-level metadata recovered from the fragment stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentMetadata {
    /// Best-guess document title; empty when nothing qualified.
    pub title: String,

    /// Issuance date formatted DD.MM.YYYY; empty when none was found.
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_from_array() {
        let bbox = BBox::from([56.0, 100.0, 120.0, 112.0]);
        assert_eq!(bbox.x0, 56.0);
        assert_eq!(bbox.y1, 112.0);
    }

    #[test]
    fn test_fragment_deserializes_extractor_dump() {
        let raw = r#"{
            "text": "Art. 1",
            "bbox": [56.7, 140.2, 91.3, 152.0],
            "page": 0,
            "font": "Helvetica-Bold",
            "size": 9.5,
            "flags": 20
        }"#;
        let fragment: Fragment = serde_json::from_str(raw).unwrap();
        assert_eq!(fragment.text, "Art. 1");
        assert_eq!(fragment.bbox.x0, 56.7);
        assert_eq!(fragment.page, 0);
        assert_eq!(fragment.font, "Helvetica-Bold");
    }

    #[test]
    fn test_fragment_font_metadata_optional() {
        let raw = r#"{"text": "x", "bbox": [0.0, 0.0, 1.0, 1.0], "page": 2}"#;
        let fragment: Fragment = serde_json::from_str(raw).unwrap();
        assert_eq!(fragment.font, "");
        assert_eq!(fragment.size, 0.0);
        assert_eq!(fragment.flags, 0);
    }

    #[test]
    fn test_bbox_serializes_as_array() {
        let fragment = Fragment::new("x", [1.0, 2.0, 3.0, 4.0], 0);
        let json = serde_json::to_value(&fragment).unwrap();
        assert_eq!(json["bbox"], serde_json::json!([1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_article_creation() {
        let article = Article::new("1", "Geltungsbereich", "Dieses Reglement gilt.");
        assert_eq!(article.number, "1");
        assert!(article.summary.is_none());
    }

    #[test]
    fn test_section_add_article() {
        let mut section = Section::new("I. Allgemeine Bestimmungen");
        assert!(section.articles.is_empty());
        section.add_article(Article::new("1", "", ""));
        assert_eq!(section.articles.len(), 1);
    }

    #[test]
    fn test_document_article_count() {
        let mut document = Document::new("Personalreglement", "01.01.2023");
        let mut first = Section::new("I");
        first.add_article(Article::new("1", "", ""));
        first.add_article(Article::new("2", "", ""));
        let mut second = Section::new("II");
        second.add_article(Article::new("3", "", ""));
        document.sections.push(first);
        document.sections.push(second);
        assert_eq!(document.article_count(), 3);
    }

    #[test]
    fn test_document_without_annotations_has_no_annotation_keys() {
        let document = Document::new("Titel", "");
        let json = serde_json::to_string(&document).unwrap();
        assert!(!json.contains("summary"));
        assert!(!json.contains("intention"));
        assert!(!json.contains("keywords"));
    }

    #[test]
    fn test_document_field_order() {
        let mut document = Document::new("Titel", "01.02.2023");
        document.summary = Some("Zusammenfassung".to_string());
        let json = serde_json::to_string(&document).unwrap();
        let title_pos = json.find("\"title\"").unwrap();
        let date_pos = json.find("\"date\"").unwrap();
        let summary_pos = json.find("\"summary\"").unwrap();
        let sections_pos = json.find("\"sections\"").unwrap();
        assert!(title_pos < date_pos);
        assert!(date_pos < summary_pos);
        assert!(summary_pos < sections_pos);
    }
}
