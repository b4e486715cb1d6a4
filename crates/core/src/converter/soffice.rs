//! Headless LibreOffice converter implementation.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use crate::config::SofficeConfig;

use super::error::ConverterError;
use super::traits::SheetConverter;
use super::types::{SheetJob, SheetResult};

/// Converts spreadsheets by driving `soffice --headless --convert-to pdf`.
///
/// Each invocation spawns a short-lived office instance that exits with the
/// conversion, so `shutdown` has nothing to release.
pub struct SofficeConverter {
    config: SofficeConfig,
}

impl SofficeConverter {
    /// Creates a new converter with the given configuration.
    pub fn new(config: SofficeConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SofficeConfig::default())
    }
}

#[async_trait]
impl SheetConverter for SofficeConverter {
    fn name(&self) -> &str {
        "soffice"
    }

    async fn convert(&self, job: SheetJob) -> Result<SheetResult, ConverterError> {
        if !job.input_path.is_file() {
            return Err(ConverterError::InputNotFound {
                path: job.input_path.clone(),
            });
        }

        std::fs::create_dir_all(&job.output_dir).map_err(|e| {
            ConverterError::OutputDirectoryFailed {
                path: job.output_dir.clone(),
                source: e,
            }
        })?;

        let start = Instant::now();
        let child = Command::new(&self.config.binary_path)
            .arg("--headless")
            .arg("--norestore")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(&job.output_dir)
            .arg(&job.input_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConverterError::BinaryNotFound {
                        path: self.config.binary_path.clone(),
                    }
                } else {
                    ConverterError::Io(e)
                }
            })?;

        let timeout_secs = self.config.timeout_secs;
        let output = timeout(Duration::from_secs(timeout_secs), child.wait_with_output())
            .await
            .map_err(|_| ConverterError::Timeout { timeout_secs })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ConverterError::conversion_failed(
                format!("soffice exited with {}", output.status),
                Some(stderr),
            ));
        }

        let output_path = job.output_path();
        if !output_path.is_file() {
            return Err(ConverterError::OutputMissing { path: output_path });
        }

        debug!(
            job_id = %job.job_id,
            input = %job.input_path.display(),
            output = %output_path.display(),
            "converted spreadsheet"
        );

        Ok(SheetResult {
            job_id: job.job_id,
            output_path,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn shutdown(&self) -> Result<(), ConverterError> {
        // The headless instance exits with each invocation.
        Ok(())
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        let result = Command::new(&self.config.binary_path)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match result {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(ConverterError::conversion_failed(
                format!("soffice --version exited with {status}"),
                None,
            )),
            Err(_) => Err(ConverterError::BinaryNotFound {
                path: self.config.binary_path.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_convert_missing_input() {
        let temp = TempDir::new().unwrap();
        let converter = SofficeConverter::with_defaults();
        let job = SheetJob {
            job_id: "job-1".to_string(),
            input_path: temp.path().join("absent.xlsx"),
            output_dir: temp.path().join("pdf"),
        };
        let result = converter.convert(job).await;
        assert!(matches!(result, Err(ConverterError::InputNotFound { .. })));
    }

    #[tokio::test]
    async fn test_convert_missing_binary() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("sheet.xlsx");
        std::fs::write(&input, b"not really a spreadsheet").unwrap();

        let converter = SofficeConverter::new(SofficeConfig {
            binary_path: PathBuf::from("/nonexistent/soffice"),
            timeout_secs: 5,
        });
        let job = SheetJob {
            job_id: "job-1".to_string(),
            input_path: input,
            output_dir: temp.path().join("pdf"),
        };
        let result = converter.convert(job).await;
        assert!(matches!(result, Err(ConverterError::BinaryNotFound { .. })));
    }

    #[tokio::test]
    async fn test_validate_missing_binary() {
        let converter = SofficeConverter::new(SofficeConfig {
            binary_path: PathBuf::from("/nonexistent/soffice"),
            timeout_secs: 5,
        });
        let result = converter.validate().await;
        assert!(matches!(result, Err(ConverterError::BinaryNotFound { .. })));
    }
}
