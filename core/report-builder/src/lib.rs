//! FILENAME: core/report-builder/src/lib.rs
//! Fluent builders for report definitions.
//!
//! This crate assembles a [`report_definition::DynamicReport`] step by step and
//! hands it to a rendering engine. It never lays out or renders anything itself.
//!
//! Layers:
//! - `column_builder` / `group_builder`: Build single columns and groups
//! - `dynamic`: The general builder and the shared `ReportBuilder` trait
//! - `fast`: Shortcut methods with type-based style inference
//! - `inference`: Value type -> default style and pattern
//! - `engine`: Hand-off to the rendering engine

mod logging;

pub mod column_builder;
pub mod dynamic;
pub mod engine;
pub mod error;
pub mod fast;
pub mod group_builder;
pub mod inference;

pub use column_builder::{ColumnBuilder, DEFAULT_COLUMN_WIDTH};
pub use dynamic::{DynamicReportBuilder, ReportBuilder};
pub use engine::{JsonExporter, RenderError, ReportEngine};
pub use error::{BuilderError, BuilderResult};
pub use fast::FastReportBuilder;
pub use group_builder::GroupBuilder;
pub use inference::{guess_style, StyleGuess, StyleInference, StyleRole};
