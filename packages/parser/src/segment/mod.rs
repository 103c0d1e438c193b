mod engine;
mod rules;

pub use engine::segment;
pub use rules::{is_section_numeral, is_sub_marker, match_article, ArticleMarker};
