//! Pipeline implementation.
//!
//! One ticket at a time, one file at a time: parse the descriptor, classify
//! the documents folder, convert spreadsheets that lack a PDF, register every
//! prepared PDF, and relocate the ticket when everything went through. Every
//! failure is caught at its loop boundary and converted into a "move on"
//! decision; nothing here retries.

use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::classifier::{classify, ClassifierError, FileCategory};
use crate::config::Config;
use crate::converter::{ConverterError, SheetConverter, SheetJob};
use crate::recon::{plan_conversions, ReconError};
use crate::registrar::{Registrar, RegistrationRequest};
use crate::registry::OrgRegistry;
use crate::ticket::{discover_tickets, parse_descriptor, DocumentName, TicketContext, TicketError};

use super::types::{FileFailure, RunSummary, TicketOutcome, TicketReport};

/// Per-ticket failures that abandon the ticket and continue the batch.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ticket(#[from] TicketError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Recon(#[from] ReconError),

    #[error("Failed to list PDF folder: {path}")]
    PdfListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The ticket pipeline: owns the immutable configuration, the organization
/// registry and the two collaborator seams.
pub struct TicketPipeline<C: SheetConverter, R: Registrar> {
    config: Config,
    registry: OrgRegistry,
    converter: Arc<C>,
    registrar: Arc<R>,
}

impl<C: SheetConverter, R: Registrar> TicketPipeline<C, R> {
    /// Creates a new pipeline.
    pub fn new(config: Config, registry: OrgRegistry, converter: C, registrar: R) -> Self {
        Self {
            config,
            registry,
            converter: Arc::new(converter),
            registrar: Arc::new(registrar),
        }
    }

    /// Processes every discovered ticket strictly sequentially.
    ///
    /// Per-ticket failures are logged and skipped; only a failure to list the
    /// input directory itself aborts the run.
    pub async fn run_batch(&self) -> Result<RunSummary, TicketError> {
        let started_at = Utc::now();
        let tickets = discover_tickets(&self.config.paths.input_dir)?;

        if tickets.is_empty() {
            info!(
                input = %self.config.paths.input_dir.display(),
                "no tickets to process"
            );
        }

        let mut outcomes = Vec::with_capacity(tickets.len());
        for dir in tickets {
            let folder_name = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            match self.process_ticket(&dir).await {
                Ok(report) => {
                    info!(
                        ticket = %folder_name,
                        converted = report.converted,
                        registered = report.registered,
                        relocated = report.relocated,
                        "ticket processed"
                    );
                    outcomes.push(TicketOutcome::Processed(report));
                }
                Err(e) => {
                    warn!(ticket = %folder_name, error = %e, "skipping ticket");
                    outcomes.push(TicketOutcome::Skipped {
                        folder_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(RunSummary {
            started_at,
            finished_at: Utc::now(),
            outcomes,
        })
    }

    /// Runs the full pipeline for one ticket.
    pub async fn process_ticket(&self, dir: &Path) -> Result<TicketReport, PipelineError> {
        let ctx = parse_descriptor(dir, &self.registry)?;
        info!(
            ticket = %ctx.folder_name,
            organization = %ctx.organization,
            form_type = %ctx.form_type,
            "processing ticket"
        );

        let docs_dir = dir.join(&self.config.ingest.documents_subdir);
        let classified = classify(&docs_dir)?;

        let xlsx_dir = docs_dir.join(FileCategory::Spreadsheet.folder_name());
        let pdf_dir = docs_dir.join(FileCategory::Pdf.folder_name());

        let plan = plan_conversions(&xlsx_dir, &pdf_dir, &self.config.naming)?;
        let conversions_queued = plan.queued_count();

        let mut failures = Vec::new();
        let converted = self
            .convert_queued(plan.queued_paths(), &pdf_dir, &mut failures)
            .await;

        let registered = self
            .register_pdfs(&ctx, &pdf_dir, &mut failures)
            .await?;

        let mut report = TicketReport {
            folder_name: ctx.folder_name.clone(),
            title: ctx.title.clone(),
            organization: ctx.organization.clone(),
            classified: classified.moved(),
            move_skipped: classified.move_skipped,
            conversions_queued,
            converted,
            registered,
            failures,
            relocated: false,
        };

        if report.is_clean() {
            report.relocated = self.relocate(&ctx, &mut report.failures);
        } else {
            info!(
                ticket = %ctx.folder_name,
                failures = report.failures.len(),
                "ticket kept in input directory for another pass"
            );
        }

        Ok(report)
    }

    /// Converts queued spreadsheets sequentially through the shared converter
    /// handle, renaming each source with the done marker only after its
    /// export succeeded. The converter is shut down after the batch on every
    /// path.
    async fn convert_queued(
        &self,
        queued: Vec<PathBuf>,
        pdf_dir: &Path,
        failures: &mut Vec<FileFailure>,
    ) -> usize {
        if queued.is_empty() {
            return 0;
        }

        let mut converted = 0;
        for input_path in queued {
            let job = SheetJob {
                job_id: Uuid::new_v4().to_string(),
                input_path: input_path.clone(),
                output_dir: pdf_dir.to_path_buf(),
            };

            match self.converter.convert(job).await {
                Ok(result) => {
                    converted += 1;
                    debug!(
                        file = %input_path.display(),
                        output = %result.output_path.display(),
                        "spreadsheet exported"
                    );
                    if let Err(e) = self.mark_done(&input_path) {
                        warn!(
                            file = %input_path.display(),
                            error = %e,
                            "failed to rename converted spreadsheet"
                        );
                        failures.push(FileFailure {
                            file: input_path,
                            reason: format!("done-marker rename failed: {e}"),
                        });
                    }
                }
                Err(e) => {
                    warn!(
                        file = %input_path.display(),
                        error = %e,
                        "conversion failed, source left untouched"
                    );
                    failures.push(FileFailure {
                        file: input_path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if let Err(e) = self.converter.shutdown().await {
            warn!(error = %e, "converter shutdown failed");
        }

        converted
    }

    /// Renames a converted spreadsheet to `<stem> <done marker>.<ext>`.
    fn mark_done(&self, path: &Path) -> Result<(), ConverterError> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        let marked = format!("{} {}.{}", stem, self.config.naming.done_marker, ext);
        let dest = path.with_file_name(marked);
        std::fs::rename(path, dest)?;
        Ok(())
    }

    /// Registers every PDF in the ticket's pdf folder with the collaborator.
    async fn register_pdfs(
        &self,
        ctx: &TicketContext,
        pdf_dir: &Path,
        failures: &mut Vec<FileFailure>,
    ) -> Result<usize, PipelineError> {
        let entries = std::fs::read_dir(pdf_dir).map_err(|e| PipelineError::PdfListing {
            path: pdf_dir.to_path_buf(),
            source: e,
        })?;

        let mut pdfs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PipelineError::PdfListing {
                path: pdf_dir.to_path_buf(),
                source: e,
            })?;
            let path = entry.path();
            let is_pdf = path
                .extension()
                .map(|e| e.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);
            if path.is_file() && is_pdf {
                pdfs.push(path);
            }
        }
        pdfs.sort();

        let mut registered = 0;
        for path in pdfs {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            let name = match DocumentName::parse(&stem) {
                Ok(name) => name,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "unparseable document name");
                    failures.push(FileFailure {
                        file: path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let request = RegistrationRequest {
                job_id: Uuid::new_v4().to_string(),
                file_path: path.clone(),
                counterparty: name.counterparty,
                document_number: name.number,
                document_date: name.date,
                tax_id: name.tax_id,
                subcode: name.subcode,
                registration_code: ctx.registration_code.clone(),
                pdf_dir: pdf_dir.to_path_buf(),
            };

            match self.registrar.register(request).await {
                Ok(receipt) => {
                    registered += 1;
                    debug!(
                        file = %path.display(),
                        registrar = %receipt.registrar,
                        "document registered"
                    );
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "registration failed");
                    failures.push(FileFailure {
                        file: path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(registered)
    }

    /// Relocates a fully processed ticket folder to the output directory,
    /// preserving its name. Returns whether the move happened.
    fn relocate(&self, ctx: &TicketContext, failures: &mut Vec<FileFailure>) -> bool {
        let output_dir = &self.config.paths.output_dir;
        if let Err(e) = std::fs::create_dir_all(output_dir) {
            warn!(path = %output_dir.display(), error = %e, "failed to create output directory");
            failures.push(FileFailure {
                file: ctx.dir.clone(),
                reason: format!("output directory unavailable: {e}"),
            });
            return false;
        }

        let dest = output_dir.join(&ctx.folder_name);
        if dest.exists() {
            warn!(path = %dest.display(), "destination already exists, ticket left in place");
            failures.push(FileFailure {
                file: ctx.dir.clone(),
                reason: "relocation destination already exists".to_string(),
            });
            return false;
        }

        match std::fs::rename(&ctx.dir, &dest) {
            Ok(()) => {
                info!(ticket = %ctx.folder_name, dest = %dest.display(), "ticket relocated");
                true
            }
            Err(e) => {
                warn!(ticket = %ctx.folder_name, error = %e, "failed to relocate ticket");
                failures.push(FileFailure {
                    file: ctx.dir.clone(),
                    reason: format!("relocation failed: {e}"),
                });
                false
            }
        }
    }
}
