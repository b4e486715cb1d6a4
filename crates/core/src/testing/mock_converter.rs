//! Mock sheet converter for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::converter::{ConverterError, SheetConverter, SheetJob, SheetResult};

/// Mock implementation of the [`SheetConverter`] trait.
///
/// Provides controllable behavior for testing:
/// - Records conversion jobs for assertions
/// - Simulates per-input failures
/// - Writes a placeholder PDF at the expected output path on success
/// - Counts shutdown calls so release-on-every-path can be asserted
#[derive(Debug, Clone, Default)]
pub struct MockSheetConverter {
    jobs: Arc<RwLock<Vec<SheetJob>>>,
    fail_inputs: Arc<RwLock<HashSet<PathBuf>>>,
    shutdowns: Arc<RwLock<usize>>,
}

impl MockSheetConverter {
    /// Create a new mock converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make conversions of the given input path fail.
    pub async fn set_fail_for(&self, path: impl AsRef<Path>) {
        self.fail_inputs
            .write()
            .await
            .insert(path.as_ref().to_path_buf());
    }

    /// All recorded conversion jobs.
    pub async fn recorded_jobs(&self) -> Vec<SheetJob> {
        self.jobs.read().await.clone()
    }

    /// Number of conversions attempted.
    pub async fn conversion_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Number of shutdown calls received.
    pub async fn shutdown_count(&self) -> usize {
        *self.shutdowns.read().await
    }
}

#[async_trait]
impl SheetConverter for MockSheetConverter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn convert(&self, job: SheetJob) -> Result<SheetResult, ConverterError> {
        self.jobs.write().await.push(job.clone());

        if self.fail_inputs.read().await.contains(&job.input_path) {
            return Err(ConverterError::conversion_failed(
                "mock failure",
                None,
            ));
        }

        let output_path = job.output_path();
        std::fs::create_dir_all(&job.output_dir)?;
        std::fs::write(&output_path, b"%PDF-mock")?;

        Ok(SheetResult {
            job_id: job.job_id,
            output_path,
            duration_ms: 1,
        })
    }

    async fn shutdown(&self) -> Result<(), ConverterError> {
        *self.shutdowns.write().await += 1;
        Ok(())
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_mock_writes_output_pdf() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("a.xlsx");
        std::fs::write(&input, b"sheet").unwrap();

        let converter = MockSheetConverter::new();
        let job = SheetJob {
            job_id: "job-1".to_string(),
            input_path: input,
            output_dir: temp.path().join("pdf"),
        };

        let result = converter.convert(job).await.unwrap();
        assert!(result.output_path.is_file());
        assert_eq!(converter.conversion_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_scripted_failure() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("bad.xlsx");
        std::fs::write(&input, b"sheet").unwrap();

        let converter = MockSheetConverter::new();
        converter.set_fail_for(&input).await;

        let job = SheetJob {
            job_id: "job-1".to_string(),
            input_path: input,
            output_dir: temp.path().join("pdf"),
        };
        let result = converter.convert(job).await;
        assert!(matches!(
            result,
            Err(ConverterError::ConversionFailed { .. })
        ));
    }
}
