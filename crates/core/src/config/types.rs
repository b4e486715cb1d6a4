use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub paths: PathsConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub converter: ConverterBackendConfig,
    #[serde(default)]
    pub registrar: RegistrarBackendConfig,
}

/// Filesystem layout: where tickets come from and where they go.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per incoming ticket.
    pub input_dir: PathBuf,
    /// Directory fully processed tickets are relocated to.
    pub output_dir: PathBuf,
    /// Key/value parameter store handed to the registrar backend.
    pub params_file: PathBuf,
    /// Organization registry (display name -> registration code).
    pub registry_file: PathBuf,
}

/// Ticket folder layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Name of the documents subfolder inside each ticket folder.
    #[serde(default = "default_documents_subdir")]
    pub documents_subdir: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            documents_subdir: default_documents_subdir(),
        }
    }
}

fn default_documents_subdir() -> String {
    "incoming".to_string()
}

/// Filename conventions used during spreadsheet/PDF reconciliation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamingConfig {
    /// Organizational marker substring removed from base names before
    /// comparison (case-insensitive).
    #[serde(default = "default_org_marker")]
    pub org_marker: String,
    /// Two-character suffix appended to a spreadsheet once its PDF export
    /// completed. Normalization recognizes both the Cyrillic and Latin "OK";
    /// this value is what gets written on rename.
    #[serde(default = "default_done_marker")]
    pub done_marker: String,
    /// Prefix of temporary spreadsheet lock files to ignore.
    #[serde(default = "default_lock_prefix")]
    pub lock_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            org_marker: default_org_marker(),
            done_marker: default_done_marker(),
            lock_prefix: default_lock_prefix(),
        }
    }
}

fn default_org_marker() -> String {
    "ЭДО".to_string()
}

fn default_done_marker() -> String {
    "ОК".to_string()
}

fn default_lock_prefix() -> String {
    "~$".to_string()
}

/// Spreadsheet converter backend selection.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ConverterBackendConfig {
    #[serde(default)]
    pub backend: SheetConverterBackend,
    /// Soffice-specific configuration (used when backend = "soffice").
    #[serde(default)]
    pub soffice: Option<SofficeConfig>,
}

/// Available spreadsheet converter backends.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SheetConverterBackend {
    #[default]
    Soffice,
}

/// Headless LibreOffice converter configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SofficeConfig {
    /// Path to the soffice binary (default: resolved from PATH).
    #[serde(default = "default_soffice_binary")]
    pub binary_path: PathBuf,
    /// Per-file conversion timeout in seconds (default: 180).
    #[serde(default = "default_convert_timeout")]
    pub timeout_secs: u64,
}

impl Default for SofficeConfig {
    fn default() -> Self {
        Self {
            binary_path: default_soffice_binary(),
            timeout_secs: default_convert_timeout(),
        }
    }
}

fn default_soffice_binary() -> PathBuf {
    PathBuf::from("soffice")
}

fn default_convert_timeout() -> u64 {
    180
}

/// Document registrar backend selection.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RegistrarBackendConfig {
    #[serde(default)]
    pub backend: RegistrarBackend,
}

/// Available registrar backends.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrarBackend {
    /// Logs registration requests and accepts them without driving the
    /// external application.
    #[default]
    DryRun,
}
