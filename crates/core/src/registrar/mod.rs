//! Document registration collaborator seam.
//!
//! The external application's GUI automation lives behind the [`Registrar`]
//! trait: the pipeline hands it a fully prepared file + metadata bundle and
//! receives success or a typed failure per document.

mod dry_run;
mod traits;
mod types;

pub use dry_run::DryRunRegistrar;
pub use traits::Registrar;
pub use types::{RegistrationReceipt, RegistrationRequest};

use thiserror::Error;

/// Typed failures a registrar can report for one document.
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// The counterparty was not found among the application's candidates.
    /// A hard failure for this document, never silently ignored.
    #[error("Counterparty not found for tax id {tax_id}")]
    CounterpartyNotFound { tax_id: String },

    /// The application rejected the registration.
    #[error("Registration rejected: {reason}")]
    Rejected { reason: String },

    /// The application could not be reached or driven.
    #[error("Registrar unavailable: {reason}")]
    Unavailable { reason: String },
}
