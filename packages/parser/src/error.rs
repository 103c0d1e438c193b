//! Error types for the parser.
//!
//! A single `ParserError` enum carries detailed context for library
//! consumers; recoverable conditions (date candidates that fail calendar
//! validation, malformed annotation responses) never surface here.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read or decode a fragments file.
    #[error("Failed to read fragments from {path}: {source}")]
    FragmentsRead {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The annotation service answered with a non-success status.
    #[error("Annotation service returned status {status}: {message}")]
    Annotation { status: u16, message: String },

    /// The annotation service answered with no usable content.
    #[error("Annotation service returned an empty response")]
    AnnotationEmptyResponse,

    /// Invalid or missing configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
