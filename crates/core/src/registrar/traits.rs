//! Trait definitions for the registrar module.

use async_trait::async_trait;

use super::types::{RegistrationReceipt, RegistrationRequest};
use super::RegistrarError;

/// A collaborator that registers prepared documents in the external
/// application.
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Returns the name of this registrar implementation.
    fn name(&self) -> &str;

    /// Registers one document, returning a receipt or a typed failure.
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistrarError>;

    /// Validates that the registrar is properly configured and ready.
    async fn validate(&self) -> Result<(), RegistrarError>;
}
