use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::report::ReportField;

/// OCR extraction failed as a whole; no partial records are emitted
///
/// Serialized across the command boundary so the frontend can show
/// "no units recognized" and fall back to manual entry.
#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum ExtractionError {
    #[error("failed to decode image: {0}")]
    InvalidImage(String),
    #[error("OCR request failed: {0}")]
    Request(String),
    #[error("OCR server error: {0}")]
    Server(String),
    #[error("failed to parse OCR response: {0}")]
    Response(String),
}

/// A single missing required field with its operator-facing message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: ReportField,
    pub message: String,
}

impl FieldError {
    pub fn missing(field: ReportField) -> Self {
        Self {
            field,
            message: field.missing_message().to_string(),
        }
    }
}

/// Required report fields are missing; every failing field is listed
#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq, Eq)]
#[error("missing required report fields")]
pub struct ValidationError {
    pub missing: Vec<FieldError>,
}

impl ValidationError {
    pub fn is_missing(&self, field: ReportField) -> bool {
        self.missing.iter().any(|e| e.field == field)
    }
}
