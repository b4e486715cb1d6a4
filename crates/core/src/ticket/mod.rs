//! Ticket discovery and descriptor parsing.
//!
//! A ticket is one incoming document-processing request, represented as a
//! subfolder of the input directory. Every failure here is recoverable at the
//! per-ticket boundary: the ticket is logged and skipped, the batch goes on.

mod descriptor;
mod discover;
mod filename;
mod types;

pub use descriptor::parse_descriptor;
pub use discover::discover_tickets;
pub use filename::{DocumentName, NameError};
pub use types::TicketContext;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering a ticket or parsing its descriptor.
#[derive(Debug, Error)]
pub enum TicketError {
    /// No descriptor file inside the ticket folder.
    #[error("No descriptor file found in ticket: {ticket}")]
    DescriptorMissing { ticket: String },

    /// More than one candidate descriptor file.
    #[error("Expected one descriptor file in ticket {ticket}, found {count}")]
    DescriptorAmbiguous { ticket: String, count: usize },

    /// Descriptor exists but could not be read.
    #[error("Failed to read descriptor: {path}")]
    DescriptorUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Descriptor content is empty or whitespace only.
    #[error("Descriptor is empty: {path}")]
    DescriptorEmpty { path: PathBuf },

    /// Descriptor content is not valid JSON.
    #[error("Failed to parse descriptor {path}: {reason}")]
    DescriptorMalformed { path: PathBuf, reason: String },

    /// Descriptor JSON is neither an object nor an array of objects.
    #[error("Descriptor {path} has unexpected shape: {reason}")]
    DescriptorShape { path: PathBuf, reason: String },

    /// A required descriptor field is missing or empty.
    #[error("Descriptor {path} is missing required field: {field}")]
    MissingField { path: PathBuf, field: &'static str },

    /// The organization title has no entry in the registry.
    #[error("Organization not found in registry: {title}")]
    UnknownOrganization { title: String },

    /// Directory listing failed.
    #[error("Failed to list directory: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
