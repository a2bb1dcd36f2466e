use crate::domain::models::ExtractError;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Reads and parses a single-document YAML source.
///
/// An empty or comment-only source parses to `Value::Null`, which every
/// traversal then reports as not found. A source holding more than one
/// document is rejected by the parser and surfaces as `SourceMalformed`.
pub fn load_document(path: &Path) -> Result<Value, ExtractError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ExtractError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = serde_yaml::from_str(&raw).map_err(|source| ExtractError::SourceMalformed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "parsed document");
    Ok(doc)
}
