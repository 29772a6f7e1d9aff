use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// One violated input invariant.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    /// The offending input field (e.g., "insertion_date").
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Structurally invalid input. The evaluator does not run; every violated
/// invariant is listed so the caller can correct the input and re-evaluate.
/// Recoverable, never fatal.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("input validation failed")]
pub struct ValidationFailure {
    pub problems: Vec<ValidationError>,
}
