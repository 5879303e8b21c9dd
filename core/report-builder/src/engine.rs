//! FILENAME: core/report-builder/src/engine.rs
//! Hand-off of a finished definition to a rendering engine.

use report_definition::{DefinitionError, DynamicReport};
use thiserror::Error;

use crate::error::BuilderError;

/// Anything that turns a report definition into output (a document, a
/// compiled template, a message for a render service).
pub trait ReportEngine {
    type Output;
    type Error: std::error::Error + 'static;

    fn render(&self, report: &DynamicReport) -> Result<Self::Output, Self::Error>;
}

#[derive(Error, Debug)]
pub enum RenderError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Build(#[from] BuilderError),

    #[error("Rendering failed: {0}")]
    Engine(#[source] E),
}

/// Emits the definition as pretty-printed JSON for an out-of-process engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ReportEngine for JsonExporter {
    type Output = String;
    type Error = DefinitionError;

    fn render(&self, report: &DynamicReport) -> Result<String, DefinitionError> {
        report.to_json()
    }
}
