//! Text cleanup applied after segmentation.
//!
//! Raw accumulator text carries extraction artifacts: words broken across
//! line ends, page numbers embedded in content runs, decomposed accents.
//! The segmenter never cleans; these functions turn its raw titles and
//! content into readable strings.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::types::Section;

/// Hyphen followed by optional whitespace and a letter: a word broken at
/// a line end. Covers German umlauts and sharp s.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BROKEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*([a-zA-ZäöüÄÖÜß])").expect("valid regex"));

/// Optional `Seite`/`Page` token plus digits at the end of the text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TRAILING_PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Seite|Page)?\s*\d+\s*$").expect("valid regex"));

/// A 1-3 digit run flanked by wide space runs (or text edges): a page
/// number that landed inside a content stream.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMBEDDED_PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[ ]{4,})(\d{1,3})([ ]{4,}|$)").expect("valid regex"));

/// Any whitespace run.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A section or sub-section marker (roman numeral or single capital
/// letter, plus dot) as it appears when a following heading leaks into an
/// article title.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEAKED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{0,2}(?:[IVX]+\.|[A-Z]\.)\s*").expect("valid regex"));

/// Recompose decomposed accents (NFC) so the letter classes above match.
///
/// Extractors frequently emit umlauts as base letter plus combining
/// diaeresis; `ä` in a character class only matches the composed form.
#[must_use]
pub fn normalize_unicode(text: &str) -> String {
    if is_nfc(text) {
        text.to_string()
    } else {
        text.nfc().collect()
    }
}

/// Join words that were split across line ends with hyphens
/// (`"Be-\nbenamt"` becomes `"Bebenamt"`) and flatten remaining line
/// breaks to spaces.
///
/// A hyphen not followed by a letter (ranges like "2-3", a dangling
/// hyphen at the end) is left untouched.
#[must_use]
pub fn join_broken_words(text: &str) -> String {
    let joined = BROKEN_WORD.replace_all(text, "$1");
    joined.replace('\n', " ")
}

/// Remove a page number (`"7"`, `"Seite 7"`, `"Page 7"`) from the end of
/// the text, then trim trailing whitespace.
#[must_use]
pub fn strip_trailing_page_number(text: &str) -> String {
    let stripped = TRAILING_PAGE_NUMBER.replace(text, "");
    stripped.trim_end().to_string()
}

/// Remove standalone page numbers (1-3 digits) embedded in the text with
/// at least four spaces on both sides, or at the text edges.
///
/// Replaces until stable: the pattern keeps its flanking space runs, so a
/// chain of page numbers sharing one spacer run is caught on the next
/// round.
#[must_use]
pub fn strip_embedded_page_numbers(text: &str) -> String {
    let mut result = text.to_string();
    loop {
        let next = EMBEDDED_PAGE_NUMBER
            .replace_all(&result, "${1}${3}")
            .to_string();
        if next == result {
            return result;
        }
        result = next;
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Cut an article title at the first section or sub-section marker past
/// its start (`"Geltungsbereich A. Begriffe"` becomes
/// `"Geltungsbereich"`).
///
/// Section look-ahead can pull the next heading's marker into a title
/// accumulator; everything from that marker on belongs to the next
/// heading, not this title. A marker at position 0 is the title's own
/// prefix and never a cut point.
#[must_use]
pub fn truncate_at_submarker(title: &str) -> String {
    for m in LEAKED_HEADING.find_iter(title) {
        if m.start() > 0 {
            return title[..m.start()].trim().to_string();
        }
    }
    title.trim().to_string()
}

/// Clean a section heading.
#[must_use]
pub fn clean_section_title(title: &str) -> String {
    let text = normalize_unicode(title);
    let text = join_broken_words(&text);
    let text = strip_trailing_page_number(&text);
    collapse_whitespace(&text)
}

/// Clean an article heading, including leaked-heading truncation.
#[must_use]
pub fn clean_article_title(title: &str) -> String {
    let text = normalize_unicode(title);
    let text = join_broken_words(&text);
    let text = strip_trailing_page_number(&text);
    let text = truncate_at_submarker(&text);
    collapse_whitespace(&text)
}

/// Clean an article body, including embedded page-number removal.
#[must_use]
pub fn clean_article_content(content: &str) -> String {
    let text = normalize_unicode(content);
    let text = join_broken_words(&text);
    let text = strip_embedded_page_numbers(&text);
    let text = strip_trailing_page_number(&text);
    collapse_whitespace(&text)
}

/// Clean every title and content string of a segmented document in place.
pub fn clean_document(sections: &mut [Section]) {
    for section in sections.iter_mut() {
        section.title = clean_section_title(&section.title);
        for article in section.articles.iter_mut() {
            article.title = clean_article_title(&article.title);
            article.content = clean_article_content(&article.content);
        }
    }
}
