//! FILENAME: core/report-builder/src/error.rs

use report_definition::{DefinitionError, ValueType};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Unknown value type: {0}")]
    UnknownValueType(String),

    #[error("No such group {number}, use add_groups first ({available} defined)")]
    NoSuchGroup { number: usize, available: usize },

    #[error("No such column {number} ({available} defined)")]
    NoSuchColumn { number: usize, available: usize },

    #[error("Column '{title}' has no property")]
    MissingProperty { title: String },

    #[error("Column '{property}' must have a positive width")]
    InvalidWidth { property: String },

    #[error("Image columns need a binary or image value type, got {0}")]
    InvalidImageType(ValueType),

    #[error("Group has no criteria column")]
    MissingCriteria,

    #[error("A report needs at least one column")]
    EmptyReport,

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error(transparent)]
    Definition(DefinitionError),
}

impl From<DefinitionError> for BuilderError {
    fn from(err: DefinitionError) -> Self {
        match err {
            DefinitionError::UnknownValueType(name) => BuilderError::UnknownValueType(name),
            other => BuilderError::Definition(other),
        }
    }
}

pub type BuilderResult<T> = Result<T, BuilderError>;
