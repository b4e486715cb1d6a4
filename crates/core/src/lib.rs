pub mod classifier;
pub mod config;
pub mod converter;
pub mod matcher;
pub mod params;
pub mod processor;
pub mod recon;
pub mod registrar;
pub mod registry;
pub mod testing;
pub mod ticket;

pub use classifier::{classify, ClassifiedFiles, ClassifierError, FileCategory};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, RegistrarBackend,
    SheetConverterBackend,
};
pub use converter::{ConverterError, SheetConverter, SheetJob, SheetResult, SofficeConverter};
pub use matcher::find_counterparty_key;
pub use params::{load_params, ParamStore, ParamsError};
pub use processor::{PipelineError, RunSummary, TicketOutcome, TicketPipeline, TicketReport};
pub use recon::{normalize, plan_conversions, ConversionPlan, ReconError, SheetDisposition};
pub use registrar::{
    DryRunRegistrar, Registrar, RegistrarError, RegistrationReceipt, RegistrationRequest,
};
pub use registry::{load_registry, OrgRegistry};
pub use ticket::{
    discover_tickets, parse_descriptor, DocumentName, NameError, TicketContext, TicketError,
};
