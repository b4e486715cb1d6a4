//! External key/value parameter store.
//!
//! The external application's parameters live in an attribute-list document:
//! a JSON file whose entries each declare a `name` and a `value`. The file is
//! consumed as flat string pairs with case-insensitive keys.

mod loader;
mod types;

pub use loader::{load_params, parse_params};
pub use types::ParamStore;

pub(crate) use loader::parse_entries;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an attribute-list file.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// File does not exist.
    #[error("Parameter file not found: {0}")]
    FileNotFound(String),

    /// File exists but could not be read.
    #[error("Failed to read parameter file: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid JSON.
    #[error("Failed to parse parameter file: {0}")]
    ParseError(String),

    /// Content parsed but has no identifiable root structure
    /// (neither an entry array nor an object carrying one).
    #[error("Parameter file has no identifiable root structure")]
    NoRoot,
}
