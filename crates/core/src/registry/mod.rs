//! Organization registry.
//!
//! Maps an organization's display name to its internal registration code
//! ("ppud"). Loaded once at startup from a reference file in the same
//! attribute-list format as the parameter store; used as a lookup table,
//! never mutated at runtime.

use std::collections::HashMap;
use std::path::Path;

use crate::params::{parse_entries, ParamsError};

/// Organization display name -> registration code table.
///
/// Lookups are by exact string match against the loaded display names; there
/// is no fuzzy or case-insensitive matching.
#[derive(Debug, Clone, Default)]
pub struct OrgRegistry {
    codes: HashMap<String, String>,
}

impl OrgRegistry {
    /// Builds a registry from raw pairs (display name, code).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            codes: entries.into_iter().collect(),
        }
    }

    /// Resolves an organization title to its registration code.
    pub fn resolve(&self, title: &str) -> Option<&str> {
        self.codes.get(title).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Load the organization registry from a reference file.
pub fn load_registry(path: &Path) -> Result<OrgRegistry, ParamsError> {
    if !path.exists() {
        return Err(ParamsError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| ParamsError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(OrgRegistry::from_entries(parse_entries(&content)?))
}
