//! Fragment input loading.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ParserError, Result};
use crate::types::Fragment;

/// Load positioned text fragments from a JSON file.
///
/// The file holds one array of fragments as produced by the upstream
/// text extraction step.
pub fn load_fragments(path: &Path) -> Result<Vec<Fragment>> {
    let content = fs::read_to_string(path)?;
    let fragments: Vec<Fragment> =
        serde_json::from_str(&content).map_err(|source| ParserError::FragmentsRead {
            path: path.display().to_string(),
            source,
        })?;

    info!(count = fragments.len(), path = %path.display(), "loaded fragments");
    Ok(fragments)
}
