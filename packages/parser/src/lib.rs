//! Erlass Parser - Convert extracted PDF text fragments to structured JSON.
//!
//! This crate turns positioned text fragments from paginated legal
//! documents (municipal decrees, personnel regulations and similar
//! two-column layouts) into a section/article tree with document
//! metadata, and can optionally annotate the result through an
//! OpenAI-compatible completion service.
//!
//! # Example
//!
//! ```
//! use erlass_parser::parser::parse_fragments;
//! use erlass_parser::types::Fragment;
//!
//! let fragments = vec![
//!     Fragment::new("Art. 1 Zweck", [72.0, 100.0, 200.0, 112.0], 1),
//!     Fragment::new("Dieses Reglement regelt die Anstellung.", [260.0, 100.0, 500.0, 112.0], 1),
//! ];
//! let document = parse_fragments(&fragments);
//! assert_eq!(document.article_count(), 1);
//! ```
//!
//! # Architecture
//!
//! The parser is organized into several modules:
//!
//! - [`config`]: Shared configuration constants
//! - [`types`]: Core data types (Fragment, Document, Section, Article)
//! - [`error`]: Error types and Result alias
//! - [`input`]: Fragment file loading
//! - [`layout`]: Column separator estimation
//! - [`metadata`]: Document title and date extraction
//! - [`segment`]: Fragment stream segmentation into sections and articles
//! - [`normalize`]: Text cleanup of titles and contents
//! - [`enrichment`]: Optional annotation via a completion service
//! - [`json`]: JSON output serialization
//! - [`cli`]: Command-line interface
//! - [`parser`]: Main parsing pipeline

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod input;
pub mod json;
pub mod layout;
pub mod metadata;
pub mod normalize;
pub mod parser;
pub mod segment;
pub mod types;

// Re-export main functions
pub use parser::parse_fragments;

// Re-export commonly used items
pub use error::{ParserError, Result};
pub use types::{Article, BBox, Document, Fragment, Section};
