//! FILENAME: core/report-definition/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Unknown value type: {0}")]
    UnknownValueType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid report options: {0}")]
    InvalidOptions(String),
}
