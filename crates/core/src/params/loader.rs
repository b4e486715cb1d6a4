use serde_json::Value;
use std::path::Path;

use super::{types::ParamStore, ParamsError};

/// Load a parameter store from an attribute-list file.
///
/// Returns a fresh store; on failure the caller's previous store stays
/// untouched (replace only on success).
pub fn load_params(path: &Path) -> Result<ParamStore, ParamsError> {
    if !path.exists() {
        return Err(ParamsError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| ParamsError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_params(&content)
}

/// Parse an attribute-list document from a string (useful for testing)
pub fn parse_params(input: &str) -> Result<ParamStore, ParamsError> {
    Ok(ParamStore::from_entries(parse_entries(input)?))
}

/// Extracts `(name, value)` pairs from an attribute-list document, preserving
/// key case. Entries whose trimmed name or value is blank are skipped, as are
/// entries that are not objects or carry non-string attributes.
pub(crate) fn parse_entries(input: &str) -> Result<Vec<(String, String)>, ParamsError> {
    let root: Value =
        serde_json::from_str(input).map_err(|e| ParamsError::ParseError(e.to_string()))?;

    let entries = match &root {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("parameters") {
            Some(Value::Array(items)) => items,
            _ => return Err(ParamsError::NoRoot),
        },
        _ => return Err(ParamsError::NoRoot),
    };

    let mut pairs = Vec::with_capacity(entries.len());
    for entry in entries {
        let Value::Object(attrs) = entry else {
            continue;
        };
        let name = attrs.get("name").and_then(Value::as_str).unwrap_or("");
        let value = attrs.get("value").and_then(Value::as_str).unwrap_or("");
        if name.trim().is_empty() || value.trim().is_empty() {
            continue;
        }
        pairs.push((name.trim().to_string(), value.trim().to_string()));
    }

    Ok(pairs)
}
