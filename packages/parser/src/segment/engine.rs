//! Single-pass segmentation engine.
//!
//! Walks the fragment stream once, in extraction order, and assembles the
//! section/article tree. The machine is explicit: a [`Phase`] names what
//! is currently open, transition methods flush and open builders, and a
//! section numeral triggers a bounded look-ahead for its title. All text
//! lands in accumulators raw; cleanup is a later pass.

use tracing::debug;

use crate::segment::rules::{is_section_numeral, is_sub_marker, match_article, ArticleMarker};
use crate::types::{Article, Fragment, Section};

/// What the machine currently has open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing open yet; fragments are pre-marker boilerplate.
    Idle,
    /// A section is open but no article; fragments before the first
    /// article marker are discarded.
    InSection,
    /// An article is open and accumulating.
    InArticle,
}

/// Accumulator for the article currently being assembled.
#[derive(Debug)]
struct ArticleBuilder {
    number: String,
    title_parts: Vec<String>,
    content_parts: Vec<String>,
}

impl ArticleBuilder {
    fn new(marker: ArticleMarker) -> Self {
        let mut title_parts = Vec::new();
        if !marker.inline_title.is_empty() {
            title_parts.push(marker.inline_title);
        }
        Self {
            number: marker.number,
            title_parts,
            content_parts: Vec::new(),
        }
    }

    fn finish(self) -> Article {
        Article::new(
            self.number,
            self.title_parts.join(" ").trim(),
            self.content_parts.join(" ").trim(),
        )
    }
}

#[derive(Debug, Default)]
struct SegmenterState {
    sections: Vec<Section>,
    section: Option<Section>,
    article: Option<ArticleBuilder>,
}

impl SegmenterState {
    fn phase(&self) -> Phase {
        match (&self.section, &self.article) {
            (_, Some(_)) => Phase::InArticle,
            (Some(_), None) => Phase::InSection,
            (None, None) => Phase::Idle,
        }
    }

    /// Close the open article into the open section. An article matched
    /// before any section heading gets an untitled section, so no matched
    /// article is ever lost.
    fn flush_article(&mut self) {
        if let Some(builder) = self.article.take() {
            let section = self.section.get_or_insert_with(|| Section::new(""));
            section.add_article(builder.finish());
        }
    }

    /// Close the open article and the open section, in that order.
    fn flush_section(&mut self) {
        self.flush_article();
        if let Some(section) = self.section.take() {
            self.sections.push(section);
        }
    }

    fn open_section(&mut self, title: String) {
        self.flush_section();
        self.section = Some(Section::new(title));
    }

    fn open_article(&mut self, marker: ArticleMarker) {
        self.flush_article();
        self.article = Some(ArticleBuilder::new(marker));
    }

    /// Route a continuation fragment by its horizontal position: left of
    /// the separator is heading text, at or right of it is body text.
    fn push_continuation(&mut self, fragment: &Fragment, separator: f64) {
        if let Some(builder) = self.article.as_mut() {
            if fragment.bbox.x0 < separator {
                builder.title_parts.push(fragment.text.clone());
            } else {
                builder.content_parts.push(fragment.text.clone());
            }
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush_section();
        self.sections
    }
}

/// Assemble a section title starting at the numeral fragment `start`.
///
/// The look-ahead skips empty fragments, absorbs consecutive sub-markers
/// (their letters join the title, dots stripped), and takes the next
/// substantive fragment as the final title part, whatever it looks like.
/// Returns the composed title and the index of the first unconsumed
/// fragment.
fn read_section_title(
    fragments: &[Fragment],
    start: usize,
    numeral_text: &str,
) -> (String, usize) {
    let numeral = numeral_text.trim_end_matches('.');
    let mut title_parts: Vec<String> = Vec::new();
    let mut j = start + 1;
    while j < fragments.len() {
        let next_text = fragments[j].text.trim();
        if next_text.is_empty() {
            j += 1;
            continue;
        }
        if is_sub_marker(next_text) {
            title_parts.push(next_text.trim_end_matches('.').to_string());
            j += 1;
            continue;
        }
        title_parts.push(next_text.to_string());
        break;
    }

    let title = if title_parts.is_empty() {
        numeral.to_string()
    } else {
        format!("{}. {}", numeral, title_parts.join(" "))
    };
    (title, j + 1)
}

/// Split the fragment stream into sections and articles.
///
/// `separator` is the column boundary from
/// [`crate::layout::find_column_separator`]; it decides whether a
/// continuation fragment extends an article's heading or its body.
/// Titles and content come back raw.
#[must_use]
pub fn segment(fragments: &[Fragment], separator: f64) -> Vec<Section> {
    let mut state = SegmenterState::default();
    let mut i = 0;

    while i < fragments.len() {
        let text = fragments[i].text.trim().to_string();
        if text.is_empty() {
            i += 1;
            continue;
        }

        if is_section_numeral(&text) {
            let (title, next) = read_section_title(fragments, i, &text);
            debug!(section = %title, "opening section");
            state.open_section(title);
            i = next;
            continue;
        }

        if let Some(marker) = match_article(&text) {
            debug!(article = %marker.number, "opening article");
            state.open_article(marker);
            i += 1;
            continue;
        }

        match state.phase() {
            Phase::InArticle => state.push_continuation(&fragments[i], separator),
            Phase::Idle | Phase::InSection => {}
        }
        i += 1;
    }

    state.finish()
}
