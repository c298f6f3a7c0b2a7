//! Coverage settings preset

use serde_json::{json, Value};

use crate::merge::{merge, MergeError};

/// Merge user settings over the coverage defaults.
///
/// `skipFiles` is a sequence, so a user-supplied list appends to the
/// defaults rather than replacing them.
pub fn settings(user: Option<&Value>) -> Result<Value, MergeError> {
    merge(&defaults(), user.unwrap_or(&Value::Null))
}

/// Coverage base tree: source paths excluded from instrumentation.
pub fn defaults() -> Value {
    json!({
        "skipFiles": ["mocks/", "interfaces/"],
    })
}
