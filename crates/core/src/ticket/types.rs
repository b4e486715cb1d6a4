use std::path::PathBuf;

/// Immutable per-ticket context built from the descriptor and the
/// organization registry.
///
/// Constructed fresh for each ticket and passed by argument through the
/// pipeline; there is no shared mutable ticket state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketContext {
    /// Absolute path of the ticket folder.
    pub dir: PathBuf,
    /// The ticket folder's name (preserved on relocation).
    pub folder_name: String,
    /// Request title from the descriptor.
    pub title: String,
    /// Organization display name from the descriptor.
    pub organization: String,
    /// Form type from the descriptor.
    pub form_type: String,
    /// Registration code resolved via the organization registry.
    pub registration_code: String,
}
