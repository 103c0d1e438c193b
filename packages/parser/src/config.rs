//! Configuration constants shared across the parser.

/// Minimum horizontal gap (layout units) between consecutive text start
/// positions that counts as a column break.
///
/// Two-column decree layouts leave a wide corridor between the label
/// column and the body column; anything narrower is ordinary word spacing.
pub const COLUMN_GAP_THRESHOLD: f64 = 20.0;

/// Number of articles submitted per annotation request.
///
/// Keeps individual prompts small enough that the service reliably
/// returns one JSON array entry per article.
pub const ARTICLE_BATCH_SIZE: usize = 5;

/// How many fragments (in reading order) are scanned for the document title.
pub const TITLE_SCAN_LIMIT: usize = 10;

/// Maximum length of the extracted document title, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// How many sections, and articles per section, the console preview shows.
pub const PREVIEW_ITEMS: usize = 3;

/// Maximum length of a content excerpt in the console preview, in characters.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// HTTP timeout for annotation requests, in seconds.
///
/// Generation against a batch of five articles can take well over a
/// minute on slow models.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default annotation endpoint (OpenAI-compatible chat completions).
pub const DEFAULT_API_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default annotation model.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";

/// Default sampling temperature for annotation requests.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Token budget for a batch (article-level) annotation request.
pub const BATCH_MAX_TOKENS: u32 = 1024;

/// Token budget for the document-level annotation request.
pub const DOCUMENT_MAX_TOKENS: u32 = 512;
