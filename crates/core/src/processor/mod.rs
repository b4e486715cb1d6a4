//! The per-ticket pipeline and the sequential batch loop.

mod pipeline;
mod types;

pub use pipeline::{PipelineError, TicketPipeline};
pub use types::{FileFailure, RunSummary, TicketOutcome, TicketReport};
