//! Mock registrar for testing.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::matcher::find_counterparty_key;
use crate::registrar::{
    Registrar, RegistrarError, RegistrationReceipt, RegistrationRequest,
};

/// Mock implementation of the [`Registrar`] trait.
///
/// Records every request. Counterparty resolution can be scripted two ways:
/// - `set_candidate_lines` installs the comma-delimited lines a real backend
///   would scrape; requests are then resolved through
///   [`find_counterparty_key`] and fail with `CounterpartyNotFound` when no
///   line matches.
/// - `set_unknown_counterparty` marks a specific tax id as unknown
///   regardless of lines.
#[derive(Debug, Clone, Default)]
pub struct MockRegistrar {
    requests: Arc<RwLock<Vec<RegistrationRequest>>>,
    candidate_lines: Arc<RwLock<Option<Vec<String>>>>,
    unknown_tax_ids: Arc<RwLock<HashSet<String>>>,
}

impl MockRegistrar {
    /// Create a new mock registrar that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the candidate lines counterparties are resolved against.
    pub async fn set_candidate_lines(&self, lines: Vec<String>) {
        *self.candidate_lines.write().await = Some(lines);
    }

    /// Make registrations for the given tax id fail with
    /// [`RegistrarError::CounterpartyNotFound`].
    pub async fn set_unknown_counterparty(&self, tax_id: impl Into<String>) {
        self.unknown_tax_ids.write().await.insert(tax_id.into());
    }

    /// All recorded registration requests.
    pub async fn recorded_requests(&self) -> Vec<RegistrationRequest> {
        self.requests.read().await.clone()
    }

    /// Number of registration attempts.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl Registrar for MockRegistrar {
    fn name(&self) -> &str {
        "mock"
    }

    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistrarError> {
        self.requests.write().await.push(request.clone());

        if self.unknown_tax_ids.read().await.contains(&request.tax_id) {
            return Err(RegistrarError::CounterpartyNotFound {
                tax_id: request.tax_id,
            });
        }

        if let Some(lines) = self.candidate_lines.read().await.as_ref() {
            let found = find_counterparty_key(
                lines,
                &request.tax_id,
                request.subcode.as_deref(),
                &request.counterparty,
            );
            if found.is_none() {
                return Err(RegistrarError::CounterpartyNotFound {
                    tax_id: request.tax_id,
                });
            }
        }

        Ok(RegistrationReceipt {
            job_id: request.job_id,
            registrar: self.name().to_string(),
            registered_at: Utc::now(),
        })
    }

    async fn validate(&self) -> Result<(), RegistrarError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn request(tax_id: &str, counterparty: &str) -> RegistrationRequest {
        RegistrationRequest {
            job_id: "job-1".to_string(),
            file_path: PathBuf::from("/t/pdf/doc.pdf"),
            counterparty: counterparty.to_string(),
            document_number: "1".to_string(),
            document_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            tax_id: tax_id.to_string(),
            subcode: None,
            registration_code: "PPUD-001".to_string(),
            pdf_dir: PathBuf::from("/t/pdf"),
        }
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let registrar = MockRegistrar::new();
        registrar
            .register(request("1234567890", "Acme"))
            .await
            .unwrap();
        assert_eq!(registrar.request_count().await, 1);
        assert_eq!(
            registrar.recorded_requests().await[0].tax_id,
            "1234567890"
        );
    }

    #[tokio::test]
    async fn test_mock_unknown_counterparty() {
        let registrar = MockRegistrar::new();
        registrar.set_unknown_counterparty("9999999999").await;
        let result = registrar.register(request("9999999999", "Acme")).await;
        assert!(matches!(
            result,
            Err(RegistrarError::CounterpartyNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_mock_resolves_against_candidate_lines() {
        let registrar = MockRegistrar::new();
        registrar
            .set_candidate_lines(vec!["Acme,ИНН:1234567890".to_string()])
            .await;

        assert!(registrar
            .register(request("1234567890", "Acme"))
            .await
            .is_ok());

        let miss = registrar.register(request("5555555555", "Other")).await;
        assert!(matches!(
            miss,
            Err(RegistrarError::CounterpartyNotFound { .. })
        ));
    }
}
