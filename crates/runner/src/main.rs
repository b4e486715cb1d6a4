use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docflow_core::{
    load_config, load_params, load_registry, validate_config, DryRunRegistrar, RegistrarBackend,
    SheetConverter, SheetConverterBackend, SofficeConverter, TicketOutcome, TicketPipeline,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

// Processing is strictly sequential: one ticket, one file, one collaborator
// call at a time.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("docflow {}", VERSION);

    // Determine config path
    let config_path = std::env::var("DOCFLOW_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Input directory: {:?}", config.paths.input_dir);
    info!("Output directory: {:?}", config.paths.output_dir);

    // Load the external application's parameter store. Failure here is fatal:
    // no ticket is touched with a partially loaded configuration.
    let params = load_params(&config.paths.params_file).with_context(|| {
        format!(
            "Failed to load parameter store from {:?}",
            config.paths.params_file
        )
    })?;
    info!("Parameter store loaded ({} entries)", params.len());

    // Load the organization registry
    let registry = load_registry(&config.paths.registry_file).with_context(|| {
        format!(
            "Failed to load organization registry from {:?}",
            config.paths.registry_file
        )
    })?;
    info!("Organization registry loaded ({} entries)", registry.len());

    // Create the spreadsheet converter
    let converter = match config.converter.backend {
        SheetConverterBackend::Soffice => {
            let soffice_config = config.converter.soffice.clone().unwrap_or_default();
            info!(
                "Using soffice converter at {:?}",
                soffice_config.binary_path
            );
            SofficeConverter::new(soffice_config)
        }
    };

    // A missing office installation is not fatal: conversions fail per file
    // and the tickets stay in the input directory for another pass.
    if let Err(e) = converter.validate().await {
        warn!("Converter validation failed: {}", e);
    }

    // Create the registrar
    let registrar = match config.registrar.backend {
        RegistrarBackend::DryRun => {
            info!("Using dry-run registrar");
            DryRunRegistrar::new(params)
        }
    };

    // Run the batch
    let pipeline = TicketPipeline::new(config, registry, converter, registrar);
    let summary = pipeline.run_batch().await.context("Batch run failed")?;

    for outcome in &summary.outcomes {
        if let TicketOutcome::Skipped {
            folder_name,
            reason,
        } = outcome
        {
            info!("Skipped ticket {}: {}", folder_name, reason);
        }
    }

    info!(
        "Run finished: {} processed, {} skipped, {} relocated",
        summary.processed_count(),
        summary.skipped_count(),
        summary.relocated_count()
    );

    Ok(())
}
