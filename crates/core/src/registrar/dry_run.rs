//! Dry-run registrar implementation.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::params::ParamStore;

use super::traits::Registrar;
use super::types::{RegistrationReceipt, RegistrationRequest};
use super::RegistrarError;

/// Accepts every registration without driving the external application.
///
/// Used for runs where the GUI collaborator is absent; logs the full request
/// so operators can audit what would have been registered. The parameter
/// store carries the external application's settings (cabinet name, form
/// defaults) the way a real backend would consume them.
pub struct DryRunRegistrar {
    params: ParamStore,
}

impl DryRunRegistrar {
    /// Creates a new dry-run registrar backed by the parameter store.
    pub fn new(params: ParamStore) -> Self {
        Self { params }
    }
}

#[async_trait]
impl Registrar for DryRunRegistrar {
    fn name(&self) -> &str {
        "dry_run"
    }

    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistrarError> {
        info!(
            job_id = %request.job_id,
            file = %request.file_path.display(),
            counterparty = %request.counterparty,
            number = %request.document_number,
            date = %request.document_date,
            tax_id = %request.tax_id,
            subcode = request.subcode.as_deref().unwrap_or("-"),
            code = %request.registration_code,
            cabinet = self.params.get("cabinet"),
            "dry-run registration"
        );

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

    #[tokio::test]
    async fn test_dry_run_accepts_everything() {
        let registrar = DryRunRegistrar::new(ParamStore::default());
        let request = RegistrationRequest {
            job_id: "job-1".to_string(),
            file_path: PathBuf::from("/t/pdf/Acme_1_01.01.2026_1234567890.pdf"),
            counterparty: "Acme".to_string(),
            document_number: "1".to_string(),
            document_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            tax_id: "1234567890".to_string(),
            subcode: None,
            registration_code: "PPUD-001".to_string(),
            pdf_dir: PathBuf::from("/t/pdf"),
        };

        let receipt = registrar.register(request).await.unwrap();
        assert_eq!(receipt.job_id, "job-1");
        assert_eq!(receipt.registrar, "dry_run");
    }
}
