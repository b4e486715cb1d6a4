//! Per-file metadata parsed from a document's base name.
//!
//! Prepared PDFs are named
//! `<counterparty>_<document number>_<dd.mm.yyyy>_<tax id>[_<subcode>]`.
//! The counterparty part may itself contain underscores, so the fixed fields
//! are anchored at the end: a tax id is 10 or 12 digits, a subcode 9 digits.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use thiserror::Error;

static TAX_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}(\d{2})?$").unwrap());
static SUBCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{9}$").unwrap());

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Fields derived from a prepared document's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentName {
    /// Counterparty display name (underscores folded back to spaces).
    pub counterparty: String,
    /// Document number.
    pub number: String,
    /// Document date.
    pub date: NaiveDate,
    /// Counterparty tax id (10 or 12 digits).
    pub tax_id: String,
    /// Registration subcode (9 digits), when present.
    pub subcode: Option<String>,
}

/// Errors produced while decomposing a document base name.
#[derive(Debug, Error)]
pub enum NameError {
    #[error("Document name has too few fields: {name}")]
    TooFewFields { name: String },

    #[error("Document name carries an invalid tax id token: {token}")]
    InvalidTaxId { token: String },

    #[error("Document name carries an invalid date token: {token}")]
    InvalidDate { token: String },

    #[error("Document name has an empty counterparty part: {name}")]
    EmptyCounterparty { name: String },
}

impl DocumentName {
    /// Parses a base name (no extension) into its fields.
    pub fn parse(stem: &str) -> Result<Self, NameError> {
        let tokens: Vec<&str> = stem.split('_').map(str::trim).collect();
        if tokens.len() < 4 {
            return Err(NameError::TooFewFields {
                name: stem.to_string(),
            });
        }

        // The subcode is optional; disambiguate from the end by digit count.
        let last = tokens[tokens.len() - 1];
        let (subcode, tax_idx) = if tokens.len() >= 5
            && SUBCODE_RE.is_match(last)
            && TAX_ID_RE.is_match(tokens[tokens.len() - 2])
        {
            (Some(last.to_string()), tokens.len() - 2)
        } else {
            (None, tokens.len() - 1)
        };

        let tax_id = tokens[tax_idx];
        if !TAX_ID_RE.is_match(tax_id) {
            return Err(NameError::InvalidTaxId {
                token: tax_id.to_string(),
            });
        }

        if tax_idx < 3 {
            return Err(NameError::TooFewFields {
                name: stem.to_string(),
            });
        }

        let date_token = tokens[tax_idx - 1];
        let date = NaiveDate::parse_from_str(date_token, DATE_FORMAT).map_err(|_| {
            NameError::InvalidDate {
                token: date_token.to_string(),
            }
        })?;

        let number = tokens[tax_idx - 2].to_string();
        let counterparty = tokens[..tax_idx - 2].join(" ").trim().to_string();
        if counterparty.is_empty() {
            return Err(NameError::EmptyCounterparty {
                name: stem.to_string(),
            });
        }

        Ok(Self {
            counterparty,
            number,
            date,
            tax_id: tax_id.to_string(),
            subcode,
        })
    }
}
