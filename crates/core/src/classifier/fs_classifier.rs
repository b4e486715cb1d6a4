use std::path::Path;
use tracing::{debug, warn};

use super::types::{ClassifiedFiles, FileCategory};
use super::ClassifierError;

/// Ensures the destination folder set exists, then moves every file found
/// directly inside the documents folder into its category's subfolder.
///
/// Folder creation is idempotent, but a creation failure for any of the five
/// folders fails the whole ticket before a single file is touched. Moves are
/// per-file tolerant: a file that cannot be moved is logged and skipped, and
/// the remaining files continue.
pub fn classify(docs_dir: &Path) -> Result<ClassifiedFiles, ClassifierError> {
    if !docs_dir.is_dir() {
        return Err(ClassifierError::DocumentsDirMissing {
            path: docs_dir.to_path_buf(),
        });
    }

    for category in FileCategory::ALL {
        let dest = docs_dir.join(category.folder_name());
        std::fs::create_dir_all(&dest).map_err(|e| ClassifierError::FolderCreationFailed {
            path: dest.clone(),
            source: e,
        })?;
    }

    let entries = std::fs::read_dir(docs_dir).map_err(|e| ClassifierError::ReadDirFailed {
        path: docs_dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ClassifierError::ReadDirFailed {
            path: docs_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut classified = ClassifiedFiles::default();
    for path in files {
        let category = FileCategory::for_path(&path);
        let file_name = match path.file_name() {
            Some(name) => name.to_os_string(),
            None => continue,
        };
        let dest = docs_dir.join(category.folder_name()).join(&file_name);

        match std::fs::rename(&path, &dest) {
            Ok(()) => {
                debug!(
                    file = %path.display(),
                    folder = category.folder_name(),
                    "classified file"
                );
                classified.push(category, dest);
            }
            Err(e) => {
                warn!(
                    file = %path.display(),
                    error = %e,
                    "failed to move file, leaving it in place"
                );
                classified.move_skipped += 1;
            }
        }
    }

    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"content").unwrap();
    }

    #[test]
    fn test_classify_partitions_by_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "report.xlsx");
        touch(temp.path(), "scan.pdf");
        touch(temp.path(), "bundle.zip");
        touch(temp.path(), "notes.docx");

        let classified = classify(temp.path()).unwrap();
        assert_eq!(classified.spreadsheets.len(), 1);
        assert_eq!(classified.pdfs.len(), 1);
        assert_eq!(classified.archives.len(), 1);
        assert_eq!(classified.rejected.len(), 1);
        assert_eq!(classified.documents.len(), 0);
        assert_eq!(classified.move_skipped, 0);

        assert!(temp.path().join("xlsx/report.xlsx").is_file());
        assert!(temp.path().join("pdf/scan.pdf").is_file());
        assert!(temp.path().join("zip/bundle.zip").is_file());
        assert!(temp.path().join("error/notes.docx").is_file());
        assert!(!temp.path().join("report.xlsx").exists());
    }

    #[test]
    fn test_classify_creates_all_five_folders() {
        let temp = TempDir::new().unwrap();
        classify(temp.path()).unwrap();
        for name in ["xlsx", "pdf", "zip", "document", "error"] {
            assert!(temp.path().join(name).is_dir(), "missing folder {name}");
        }
    }

    #[test]
    fn test_classify_is_idempotent_on_existing_folders() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("pdf")).unwrap();
        touch(temp.path(), "scan.pdf");

        let classified = classify(temp.path()).unwrap();
        assert_eq!(classified.pdfs.len(), 1);
    }

    #[test]
    fn test_classify_ignores_subfolders() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        touch(&temp.path().join("nested"), "inner.pdf");
        touch(temp.path(), "outer.pdf");

        let classified = classify(temp.path()).unwrap();
        assert_eq!(classified.pdfs.len(), 1);
        assert!(temp.path().join("nested/inner.pdf").is_file());
    }

    #[test]
    fn test_classify_missing_documents_dir() {
        let temp = TempDir::new().unwrap();
        let result = classify(&temp.path().join("absent"));
        assert!(matches!(
            result,
            Err(ClassifierError::DocumentsDirMissing { .. })
        ));
    }

    #[test]
    fn test_file_without_extension_goes_to_error_bucket() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "README");

        let classified = classify(temp.path()).unwrap();
        assert_eq!(classified.rejected.len(), 1);
        assert!(temp.path().join("error/README").is_file());
    }
}
