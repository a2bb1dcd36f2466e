use crate::domain::models::{ExtractError, Resolution};
use serde_yaml::Value;

/// Renders a resolved value.
///
/// Scalars keep their plain textual form with no quoting or type tags.
/// Composites are re-serialized as block-style YAML in document order with
/// the trailing newline stripped. A resolved null renders as `NotFound` so
/// the caller's default policy applies to it.
pub fn render(value: &Value) -> Result<Resolution, ExtractError> {
    match value {
        Value::Null => Ok(Resolution::NotFound),
        Value::Bool(b) => Ok(Resolution::Found(b.to_string())),
        Value::Number(n) => Ok(Resolution::Found(n.to_string())),
        Value::String(s) => Ok(Resolution::Found(s.clone())),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            let block = serde_yaml::to_string(value).map_err(ExtractError::Render)?;
            Ok(Resolution::Found(block.trim_end_matches('\n').to_string()))
        }
    }
}
