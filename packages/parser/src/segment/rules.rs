//! Marker recognition rules.
//!
//! A fragment can open a section (standalone roman numeral), open an
//! article (one of five label forms), or continue whatever is open.
//! Article rules live in one ordered table; the first matching rule wins,
//! so the bare-number form can never shadow an explicit label.

use regex::Regex;
use std::sync::LazyLock;

/// Standalone roman numeral, optionally with a trailing dot (`IV.`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[IVX]+\.?$").expect("valid regex"));

/// Single capital letter, optionally with a trailing dot (`A.`), marking
/// a sub-section heading.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUB_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\.?$").expect("valid regex"));

/// Ordered article marker rules. Priority is the table order.
#[allow(clippy::expect_used)] // Static regexes that are guaranteed to be valid
static ARTICLE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Article 1: Title
        r"(?i)^Article\s+(\d+)[:\s]*(.*)",
        // Art. 1: Title
        r"(?i)^Art\.\s*(\d+)[:\s]*(.*)",
        // § 1: Title
        r"(?i)^§\s*(\d+)[:\s]*(.*)",
        // Section 1: Title
        r"(?i)^Section\s+(\d+)[:\s]*(.*)",
        // 1. Title
        r"^(\d+)\.\s*(.*)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

/// An article marker recognized at the start of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMarker {
    /// Captured article number.
    pub number: String,

    /// Title text following the number on the same fragment; empty when
    /// the marker stood alone.
    pub inline_title: String,
}

/// Whether the trimmed fragment text is a standalone section numeral.
#[must_use]
pub fn is_section_numeral(text: &str) -> bool {
    SECTION_NUMERAL.is_match(text)
}

/// Whether the trimmed fragment text is a sub-section marker.
#[must_use]
pub fn is_sub_marker(text: &str) -> bool {
    SUB_MARKER.is_match(text)
}

/// Match the trimmed fragment text against the article rules in order.
#[must_use]
pub fn match_article(text: &str) -> Option<ArticleMarker> {
    ARTICLE_RULES.iter().find_map(|rule| {
        let caps = rule.captures(text)?;
        let number = caps.get(1)?.as_str().to_string();
        let inline_title = caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        Some(ArticleMarker {
            number,
            inline_title,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_numeral() {
        assert!(is_section_numeral("I"));
        assert!(is_section_numeral("I."));
        assert!(is_section_numeral("IV."));
        assert!(is_section_numeral("XII"));
        assert!(!is_section_numeral("4."));
        assert!(!is_section_numeral("IV. Arbeitszeit"));
        assert!(!is_section_numeral(""));
    }

    #[test]
    fn test_sub_marker() {
        assert!(is_sub_marker("A"));
        assert!(is_sub_marker("A."));
        assert!(is_sub_marker("Z."));
        assert!(!is_sub_marker("AB."));
        assert!(!is_sub_marker("a."));
        assert!(!is_sub_marker("A. Geltungsbereich"));
    }

    #[test]
    fn test_article_label_forms() {
        let marker = match_article("Article 1: Purpose").unwrap();
        assert_eq!(marker.number, "1");
        assert_eq!(marker.inline_title, "Purpose");

        let marker = match_article("Art. 7 Kündigung").unwrap();
        assert_eq!(marker.number, "7");
        assert_eq!(marker.inline_title, "Kündigung");

        let marker = match_article("§ 3: Lohn").unwrap();
        assert_eq!(marker.number, "3");
        assert_eq!(marker.inline_title, "Lohn");

        let marker = match_article("Section 2").unwrap();
        assert_eq!(marker.number, "2");
        assert_eq!(marker.inline_title, "");
    }

    #[test]
    fn test_bare_number_form() {
        let marker = match_article("12. Schlussbestimmungen").unwrap();
        assert_eq!(marker.number, "12");
        assert_eq!(marker.inline_title, "Schlussbestimmungen");

        let marker = match_article("12.").unwrap();
        assert_eq!(marker.number, "12");
        assert_eq!(marker.inline_title, "");
    }

    #[test]
    fn test_case_insensitive_labels() {
        assert!(match_article("ARTICLE 4").is_some());
        assert!(match_article("art. 9: Ferien").is_some());
        assert!(match_article("section 11").is_some());
    }

    #[test]
    fn test_label_must_start_the_fragment() {
        assert!(match_article("Der Artikel 5 regelt").is_none());
        assert!(match_article("siehe § 3").is_none());
    }

    #[test]
    fn test_german_label_is_not_a_marker() {
        assert!(match_article("Artikel 5").is_none());
    }

    #[test]
    fn test_bare_number_needs_the_dot() {
        assert!(match_article("12 Schlussbestimmungen").is_none());
    }

    #[test]
    fn test_roman_and_decimal_markers_are_disjoint() {
        // "IV." is a section, never an article; "4." the other way round.
        assert!(is_section_numeral("IV."));
        assert!(match_article("IV.").is_none());
        assert!(!is_section_numeral("4."));
        assert!(match_article("4.").is_some());
    }
}
