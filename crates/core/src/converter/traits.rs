//! Trait definitions for the converter module.

use async_trait::async_trait;

use super::error::ConverterError;
use super::types::{SheetJob, SheetResult};

/// A converter that can export spreadsheets to PDF.
///
/// One converter instance is shared across all conversions of a ticket;
/// callers must invoke [`SheetConverter::shutdown`] after the batch, on every
/// path, so the backing application instance is released.
#[async_trait]
pub trait SheetConverter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Converts one spreadsheet according to the job specification.
    async fn convert(&self, job: SheetJob) -> Result<SheetResult, ConverterError>;

    /// Releases the backing application instance, if any.
    async fn shutdown(&self) -> Result<(), ConverterError>;

    /// Validates that the converter is properly configured and ready.
    async fn validate(&self) -> Result<(), ConverterError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct NoopConverter;

    #[async_trait]
    impl SheetConverter for NoopConverter {
        fn name(&self) -> &str {
            "noop"
        }

        async fn convert(&self, job: SheetJob) -> Result<SheetResult, ConverterError> {
            Ok(SheetResult {
                output_path: job.output_path(),
                job_id: job.job_id,
                duration_ms: 1,
            })
        }

        async fn shutdown(&self) -> Result<(), ConverterError> {
            Ok(())
        }

        async fn validate(&self) -> Result<(), ConverterError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_noop_converter() {
        let converter = NoopConverter;
        let job = SheetJob {
            job_id: "job-1".to_string(),
            input_path: PathBuf::from("/in/a.xlsx"),
            output_dir: PathBuf::from("/out"),
        };
        let result = converter.convert(job).await.unwrap();
        assert_eq!(result.job_id, "job-1");
        assert_eq!(result.output_path, PathBuf::from("/out/a.pdf"));
    }
}
