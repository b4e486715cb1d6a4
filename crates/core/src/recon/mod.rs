//! Spreadsheet/PDF reconciliation.
//!
//! Decides which spreadsheets still need a PDF export by comparing
//! normalized base names against the PDFs already present.

mod normalize;
mod plan;

pub use normalize::normalize;
pub use plan::{plan_conversions, ConversionPlan, SheetDisposition, SheetEntry};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that fail reconciliation for the whole ticket.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("Failed to list folder: {path}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
