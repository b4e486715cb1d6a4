use chrono::{DateTime, NaiveDate, Utc};
use std::path::PathBuf;

/// Everything the registration collaborator needs for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    /// Unique request identifier.
    pub job_id: String,
    /// The prepared PDF.
    pub file_path: PathBuf,
    /// Counterparty display name.
    pub counterparty: String,
    /// Document number.
    pub document_number: String,
    /// Document date.
    pub document_date: NaiveDate,
    /// Counterparty tax id.
    pub tax_id: String,
    /// Counterparty registration subcode, when known.
    pub subcode: Option<String>,
    /// Organization registration code resolved from the registry.
    pub registration_code: String,
    /// The ticket's PDF folder.
    pub pdf_dir: PathBuf,
}

/// Confirmation returned by a registrar after a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub job_id: String,
    pub registrar: String,
    pub registered_at: DateTime<Utc>,
}
