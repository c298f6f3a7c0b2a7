//! Formatter settings preset
//!
//! Per-file-type formatting rule overrides. Contract and component sources
//! get the wide explicit style; script and data files share one compact
//! rule set.

use serde_json::{json, Value};

use crate::merge::{merge, MergeError};

/// Merge user settings over the formatter defaults.
///
/// `overrides` is a sequence, so user-supplied entries append after the
/// built-in ones.
pub fn settings(user: Option<&Value>) -> Result<Value, MergeError> {
    merge(&defaults(), user.unwrap_or(&Value::Null))
}

/// Formatter base tree: one override entry per file type.
pub fn defaults() -> Value {
    json!({
        "overrides": [
            {
                "files": "*.vue",
                "options": {
                    "bracketSpacing": false,
                    "printWidth": 145,
                    "tabWidth": 4,
                    "useTabs": false,
                    "singleQuote": false,
                    "explicitTypes": "always",
                    "endOfLine": "lf",
                    "semi": false,
                },
            },
            {
                "files": "*.sol",
                "options": {
                    "bracketSpacing": false,
                    "printWidth": 145,
                    "tabWidth": 4,
                    "useTabs": false,
                    "singleQuote": false,
                    "explicitTypes": "always",
                    "endOfLine": "lf",
                },
            },
            script_override("*.js"),
            script_override("*.ts"),
            script_override("*.json"),
        ],
    })
}

/// Shared rule set for script and data files.
fn script_override(files: &str) -> Value {
    json!({
        "files": files,
        "options": {
            "printWidth": 145,
            "semi": false,
            "trailingComma": "es5",
            "tabWidth": 4,
            "endOfLine": "lf",
        },
    })
}
