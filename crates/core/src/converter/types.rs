use std::path::PathBuf;

/// One spreadsheet-to-PDF conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetJob {
    /// Unique job identifier.
    pub job_id: String,
    /// Spreadsheet to convert.
    pub input_path: PathBuf,
    /// Directory the PDF is written into (same base name as the input).
    pub output_dir: PathBuf,
}

impl SheetJob {
    /// Expected output path: the input's base name with a `.pdf` extension,
    /// inside the output directory.
    pub fn output_path(&self) -> PathBuf {
        let stem = self
            .input_path
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_default();
        let mut name = stem;
        name.push(".pdf");
        self.output_dir.join(name)
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetResult {
    pub job_id: String,
    pub output_path: PathBuf,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_swaps_extension() {
        let job = SheetJob {
            job_id: "job-1".to_string(),
            input_path: PathBuf::from("/tickets/t1/incoming/xlsx/Report 42.xlsx"),
            output_dir: PathBuf::from("/tickets/t1/incoming/pdf"),
        };
        assert_eq!(
            job.output_path(),
            PathBuf::from("/tickets/t1/incoming/pdf/Report 42.pdf")
        );
    }
}
