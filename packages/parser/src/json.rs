//! JSON output serialization.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::types::Document;

/// Render a document as pretty-printed JSON with a trailing newline.
pub fn to_json_string(document: &Document) -> Result<String> {
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');
    Ok(content)
}

/// Save a document as a JSON file.
///
/// Writes to a temp file in the target directory, syncs, then renames,
/// so a crash mid-write cannot leave a truncated output file.
pub fn save_document(document: &Document, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_file = temp_path_for(output_path);
    let content = to_json_string(document)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_path.exists() {
        fs::remove_file(output_path)?;
    }

    fs::rename(&temp_file, output_path)?;

    info!(path = %output_path.display(), "saved document");
    Ok(())
}

fn temp_path_for(output_path: &Path) -> PathBuf {
    let file_name = output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.json".to_string());
    output_path.with_file_name(format!(".{file_name}.tmp"))
}
