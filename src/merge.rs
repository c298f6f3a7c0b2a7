//! Deep merge for settings trees
//!
//! Combines a base tree of built-in defaults with a caller-supplied
//! override tree:
//! - Mappings: deep-merge by key
//! - Sequences: APPEND (base elements first, then override elements)
//! - Scalars: override (override wins)

use serde_json::Value;

/// Errors from a settings merge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// An override sequence can only append to a base sequence.
    #[error("cannot append sequence at key `{key}`: base value is {found}")]
    ShapeMismatch { key: String, found: &'static str },
}

/// Deep merge two settings trees.
///
/// The override tree is applied key by key onto the base tree:
/// - A `Null` override leaves the base unchanged.
/// - A non-mapping base (scalar or sequence) is returned verbatim; the
///   merge only takes effect between two mappings.
/// - Mapping values merge recursively; sequence values append to the base
///   sequence (no deduplication); scalar and null values replace the base
///   value.
///
/// A mapping override for a key whose base value is not a mapping resolves
/// through the non-mapping rule above: the base value survives and the
/// override mapping is discarded. Callers rely on structured overrides
/// being inert for scalar keys.
///
/// Appending requires the base value at that key to already be a sequence;
/// anything else is a [`MergeError::ShapeMismatch`].
pub fn merge(base: &Value, overlay: &Value) -> Result<Value, MergeError> {
    if overlay.is_null() {
        return Ok(base.clone());
    }

    let (base_map, overlay_map) = match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => (base_map, overlay_map),
        _ => return Ok(base.clone()),
    };

    let mut output = base_map.clone();
    for (key, overlay_value) in overlay_map {
        match overlay_value {
            Value::Object(_) => {
                let merged = match base_map.get(key) {
                    Some(base_value) => merge(base_value, overlay_value)?,
                    None => overlay_value.clone(),
                };
                output.insert(key.clone(), merged);
            }
            Value::Array(extra) => match output.get_mut(key) {
                Some(Value::Array(items)) => items.extend(extra.iter().cloned()),
                other => {
                    return Err(MergeError::ShapeMismatch {
                        key: key.clone(),
                        found: kind_name(other.as_deref()),
                    })
                }
            },
            _ => {
                output.insert(key.clone(), overlay_value.clone());
            }
        }
    }

    Ok(Value::Object(output))
}

fn kind_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "absent",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "a sequence",
        Some(Value::Object(_)) => "a mapping",
    }
}
