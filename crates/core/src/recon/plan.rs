use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::NamingConfig;

use super::normalize::normalize;
use super::ReconError;

/// Why a spreadsheet was or was not queued for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetDisposition {
    /// No PDF with a matching normalized name exists yet.
    Queued,
    /// A matching PDF is already present.
    AlreadyConverted,
    /// Temporary lock file, ignored.
    LockFile,
    /// The name normalized to an empty string.
    EmptyName,
    /// Another spreadsheet with the same normalized name was seen first.
    Duplicate,
}

/// One spreadsheet observed during reconciliation.
#[derive(Debug, Clone)]
pub struct SheetEntry {
    pub path: PathBuf,
    pub normalized: String,
    pub disposition: SheetDisposition,
}

/// Outcome of a reconciliation pass over a ticket's spreadsheet folder.
#[derive(Debug, Clone, Default)]
pub struct ConversionPlan {
    pub entries: Vec<SheetEntry>,
}

impl ConversionPlan {
    /// Spreadsheets needing conversion, in observation order.
    pub fn queued_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|e| e.disposition == SheetDisposition::Queued)
            .map(|e| e.path.clone())
            .collect()
    }

    pub fn queued_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.disposition == SheetDisposition::Queued)
            .count()
    }
}

/// Builds the conversion plan for one ticket.
///
/// A spreadsheet is queued iff its normalized base name is absent from the
/// set of normalized PDF base names. Lock files, empty normalizations and
/// duplicates are recorded but never queued.
pub fn plan_conversions(
    xlsx_dir: &Path,
    pdf_dir: &Path,
    naming: &NamingConfig,
) -> Result<ConversionPlan, ReconError> {
    let pdf_names = collect_normalized_stems(pdf_dir, "pdf", &naming.org_marker)?;

    let mut plan = ConversionPlan::default();
    let mut seen: HashSet<String> = HashSet::new();

    for path in list_files_with_extension(xlsx_dir, "xlsx")? {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if file_name.starts_with(&naming.lock_prefix) {
            debug!(file = %path.display(), "ignoring spreadsheet lock file");
            plan.entries.push(SheetEntry {
                path,
                normalized: String::new(),
                disposition: SheetDisposition::LockFile,
            });
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let normalized = normalize(&stem, &naming.org_marker);

        let disposition = if normalized.is_empty() {
            warn!(file = %path.display(), "spreadsheet name normalizes to nothing, skipping");
            SheetDisposition::EmptyName
        } else if !seen.insert(normalized.clone()) {
            warn!(
                file = %path.display(),
                normalized = %normalized,
                "duplicate spreadsheet name, already queued once"
            );
            SheetDisposition::Duplicate
        } else if pdf_names.contains(&normalized) {
            debug!(file = %path.display(), "PDF already present, skipping conversion");
            SheetDisposition::AlreadyConverted
        } else {
            SheetDisposition::Queued
        };

        plan.entries.push(SheetEntry {
            path,
            normalized,
            disposition,
        });
    }

    Ok(plan)
}

fn collect_normalized_stems(
    dir: &Path,
    extension: &str,
    org_marker: &str,
) -> Result<HashSet<String>, ReconError> {
    let mut names = HashSet::new();
    for path in list_files_with_extension(dir, extension)? {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let normalized = normalize(&stem, org_marker);
        if !normalized.is_empty() {
            names.insert(normalized);
        }
    }
    Ok(names)
}

/// Lists files with the given extension (case-insensitive), sorted by name.
fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ReconError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ReconError::ReadDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReconError::ReadDirFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let matches = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if path.is_file() && matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
