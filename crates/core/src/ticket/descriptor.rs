//! Ticket descriptor parsing.
//!
//! Each ticket folder carries exactly one `*.txt` file holding a JSON
//! document (or an array whose first element is the document) with the
//! request metadata.

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::registry::OrgRegistry;

use super::types::TicketContext;
use super::TicketError;

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    #[serde(rename = "orgFil")]
    org_fil: Option<RawTitle>,
    title: Option<String>,
    #[serde(rename = "formTypeInt")]
    form_type_int: Option<RawTitle>,
}

#[derive(Debug, Deserialize)]
struct RawTitle {
    title: Option<String>,
}

/// Parses the ticket descriptor and resolves the organization's registration
/// code against the registry.
///
/// Fails (per-ticket recoverable) if the descriptor file is absent or
/// ambiguous, unreadable, empty, malformed, of the wrong shape, missing any
/// of the required fields, or if the organization has no registry entry.
pub fn parse_descriptor(
    ticket_dir: &Path,
    registry: &OrgRegistry,
) -> Result<TicketContext, TicketError> {
    let folder_name = ticket_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let path = find_descriptor(ticket_dir, &folder_name)?;

    let content =
        std::fs::read_to_string(&path).map_err(|e| TicketError::DescriptorUnreadable {
            path: path.clone(),
            source: e,
        })?;

    if content.trim().is_empty() {
        return Err(TicketError::DescriptorEmpty { path });
    }

    let root: Value =
        serde_json::from_str(&content).map_err(|e| TicketError::DescriptorMalformed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    // A descriptor is either the object itself or an array whose first
    // element is the object.
    let object = match root {
        Value::Object(_) => root,
        Value::Array(items) => match items.into_iter().next() {
            Some(first @ Value::Object(_)) => first,
            Some(_) => {
                return Err(TicketError::DescriptorShape {
                    path,
                    reason: "first array element is not an object".to_string(),
                })
            }
            None => {
                return Err(TicketError::DescriptorShape {
                    path,
                    reason: "array is empty".to_string(),
                })
            }
        },
        _ => {
            return Err(TicketError::DescriptorShape {
                path,
                reason: "root is neither an object nor an array".to_string(),
            })
        }
    };

    let raw: RawDescriptor =
        serde_json::from_value(object).map_err(|e| TicketError::DescriptorMalformed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    let organization = require(
        &path,
        "orgFil.title",
        raw.org_fil.and_then(|t| t.title),
    )?;
    let title = require(&path, "title", raw.title)?;
    let form_type = require(
        &path,
        "formTypeInt.title",
        raw.form_type_int.and_then(|t| t.title),
    )?;

    let registration_code = registry
        .resolve(&organization)
        .ok_or_else(|| TicketError::UnknownOrganization {
            title: organization.clone(),
        })?
        .to_string();

    Ok(TicketContext {
        dir: ticket_dir.to_path_buf(),
        folder_name,
        title,
        organization,
        form_type,
        registration_code,
    })
}

/// Finds the single `*.txt` descriptor file directly inside the ticket folder.
fn find_descriptor(ticket_dir: &Path, folder_name: &str) -> Result<PathBuf, TicketError> {
    let entries = std::fs::read_dir(ticket_dir).map_err(|e| TicketError::Io {
        path: ticket_dir.to_path_buf(),
        source: e,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TicketError::Io {
            path: ticket_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let is_txt = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);
        if path.is_file() && is_txt {
            candidates.push(path);
        }
    }

    match candidates.len() {
        0 => Err(TicketError::DescriptorMissing {
            ticket: folder_name.to_string(),
        }),
        1 => Ok(candidates.remove(0)),
        count => Err(TicketError::DescriptorAmbiguous {
            ticket: folder_name.to_string(),
            count,
        }),
    }
}

fn require(
    path: &Path,
    field: &'static str,
    value: Option<String>,
) -> Result<String, TicketError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(TicketError::MissingField {
            path: path.to_path_buf(),
            field,
        }),
    }
}
