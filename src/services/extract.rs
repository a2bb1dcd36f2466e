use crate::domain::models::{ExtractError, Resolution};
use crate::services::{render, source};
use serde_yaml::Value;
use std::path::Path;

/// Splits a dot-path into its non-empty segments. Leading, trailing and
/// doubled dots are skipped rather than rejected, so `".a..b."` names the
/// same path as `"a.b"`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|s| !s.is_empty()).collect()
}

/// Walks `doc` one segment at a time. Traversal only descends into
/// mappings; any other value at an intermediate step means the path is
/// absent, never a type fault.
pub fn resolve<'a>(doc: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    let mut current = doc;
    for segment in segments {
        current = match current {
            Value::Mapping(map) => map.get(*segment)?,
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Sequence(_)
            | Value::Tagged(_) => return None,
        };
    }
    Some(current)
}

/// Parses `file`, resolves `path_expr` against it and renders the result.
pub fn extract_from_file(path_expr: &str, file: &Path) -> Result<Resolution, ExtractError> {
    let doc = source::load_document(file)?;
    let segments = split_path(path_expr);
    match resolve(&doc, &segments) {
        Some(value) => render::render(value),
        None => Ok(Resolution::NotFound),
    }
}
