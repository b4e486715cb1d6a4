//! Extension-based file classification.
//!
//! Partitions the files of a ticket's documents folder into a fixed set of
//! destination subfolders. A file's destination is a pure function of its
//! extension; moving is tolerant of per-file failures but the destination
//! folder set is all-or-nothing.

mod fs_classifier;
mod types;

pub use fs_classifier::classify;
pub use types::{ClassifiedFiles, FileCategory};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that fail classification for the whole ticket.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The documents subfolder does not exist.
    #[error("Documents folder not found: {path}")]
    DocumentsDirMissing { path: PathBuf },

    /// One of the destination subfolders could not be created.
    #[error("Failed to create destination folder: {path}")]
    FolderCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The documents folder could not be listed.
    #[error("Failed to list documents folder: {path}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
