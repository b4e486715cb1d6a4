use std::path::{Path, PathBuf};

/// Destination categories for classified files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// `.xlsx` spreadsheets awaiting PDF conversion.
    Spreadsheet,
    /// `.pdf` documents ready for registration.
    Pdf,
    /// `.zip` archives.
    Archive,
    /// Reserved for collaborators; never targeted by extension rules.
    Document,
    /// Everything unrecognized.
    Reject,
}

impl FileCategory {
    /// All categories, in destination-folder creation order.
    pub const ALL: [FileCategory; 5] = [
        FileCategory::Spreadsheet,
        FileCategory::Pdf,
        FileCategory::Archive,
        FileCategory::Document,
        FileCategory::Reject,
    ];

    /// Deterministic destination subfolder name.
    pub fn folder_name(&self) -> &'static str {
        match self {
            FileCategory::Spreadsheet => "xlsx",
            FileCategory::Pdf => "pdf",
            FileCategory::Archive => "zip",
            FileCategory::Document => "document",
            FileCategory::Reject => "error",
        }
    }

    /// Classifies a file by its extension (case-insensitive). Unknown and
    /// missing extensions land in the error bucket. `Document` is provisioned
    /// but never returned here.
    pub fn for_path(path: &Path) -> FileCategory {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return FileCategory::Reject;
        };
        if ext.eq_ignore_ascii_case("xlsx") {
            FileCategory::Spreadsheet
        } else if ext.eq_ignore_ascii_case("pdf") {
            FileCategory::Pdf
        } else if ext.eq_ignore_ascii_case("zip") {
            FileCategory::Archive
        } else {
            FileCategory::Reject
        }
    }
}

/// Destination paths of the files a classification pass actually moved.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedFiles {
    pub spreadsheets: Vec<PathBuf>,
    pub pdfs: Vec<PathBuf>,
    pub archives: Vec<PathBuf>,
    pub documents: Vec<PathBuf>,
    pub rejected: Vec<PathBuf>,
    /// Files that could not be moved and stayed where they were.
    pub move_skipped: usize,
}

impl ClassifiedFiles {
    pub(crate) fn push(&mut self, category: FileCategory, path: PathBuf) {
        match category {
            FileCategory::Spreadsheet => self.spreadsheets.push(path),
            FileCategory::Pdf => self.pdfs.push(path),
            FileCategory::Archive => self.archives.push(path),
            FileCategory::Document => self.documents.push(path),
            FileCategory::Reject => self.rejected.push(path),
        }
    }

    /// Number of files moved into destination folders.
    pub fn moved(&self) -> usize {
        self.spreadsheets.len()
            + self.pdfs.len()
            + self.archives.len()
            + self.documents.len()
            + self.rejected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_table() {
        assert_eq!(
            FileCategory::for_path(Path::new("a/report.xlsx")),
            FileCategory::Spreadsheet
        );
        assert_eq!(
            FileCategory::for_path(Path::new("a/report.PDF")),
            FileCategory::Pdf
        );
        assert_eq!(
            FileCategory::for_path(Path::new("a/bundle.Zip")),
            FileCategory::Archive
        );
    }

    #[test]
    fn test_unknown_extension_goes_to_error_bucket() {
        assert_eq!(
            FileCategory::for_path(Path::new("a/notes.docx")),
            FileCategory::Reject
        );
        assert_eq!(
            FileCategory::for_path(Path::new("a/noext")),
            FileCategory::Reject
        );
    }

    #[test]
    fn test_folder_names_are_deterministic() {
        let names: Vec<_> = FileCategory::ALL.iter().map(|c| c.folder_name()).collect();
        assert_eq!(names, vec!["xlsx", "pdf", "zip", "document", "error"]);
    }
}
