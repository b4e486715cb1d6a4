use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// One file that failed during a ticket's processing.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub file: PathBuf,
    pub reason: String,
}

/// Outcome of processing a single ticket to the end.
#[derive(Debug, Clone)]
pub struct TicketReport {
    /// Ticket folder name.
    pub folder_name: String,
    /// Request title from the descriptor.
    pub title: String,
    /// Organization display name.
    pub organization: String,
    /// Files moved into destination folders.
    pub classified: usize,
    /// Files that could not be moved during classification.
    pub move_skipped: usize,
    /// Spreadsheets queued for conversion.
    pub conversions_queued: usize,
    /// Spreadsheets successfully exported to PDF.
    pub converted: usize,
    /// Documents registered with the collaborator.
    pub registered: usize,
    /// Per-file failures accumulated across all stages.
    pub failures: Vec<FileFailure>,
    /// Whether the ticket folder was relocated to the output directory.
    pub relocated: bool,
}

impl TicketReport {
    /// A ticket is clean when every file made it through every stage.
    pub fn is_clean(&self) -> bool {
        self.move_skipped == 0 && self.failures.is_empty()
    }
}

/// Per-ticket outcome within a batch run.
#[derive(Debug, Clone)]
pub enum TicketOutcome {
    /// The pipeline ran to the end (possibly with per-file failures).
    Processed(TicketReport),
    /// The ticket was abandoned at a per-ticket boundary.
    Skipped { folder_name: String, reason: String },
}

/// Summary of one batch run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<TicketOutcome>,
}

impl RunSummary {
    /// Tickets whose pipeline ran to the end.
    pub fn processed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TicketOutcome::Processed(_)))
            .count()
    }

    /// Tickets abandoned at a per-ticket boundary.
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TicketOutcome::Skipped { .. }))
            .count()
    }

    /// Tickets relocated to the output directory.
    pub fn relocated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TicketOutcome::Processed(r) if r.relocated))
            .count()
    }
}
