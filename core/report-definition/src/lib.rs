//! FILENAME: core/report-definition/src/lib.rs
//! Report definition model.
//!
//! Everything the rendering engine needs to know about a report, and nothing
//! about how it is laid out on the page.
//!
//! Layers:
//! - `value_type`: Declared field types and their names
//! - `column`: Detail columns (property, image, barcode)
//! - `group`: Group breaks, variables and calculations
//! - `crosstab`: Pivot sub-reports attached to groups
//! - `options`: Default styles and page layout
//! - `report`: The aggregate handed to the engine

pub mod column;
pub mod crosstab;
pub mod error;
pub mod group;
pub mod options;
pub mod report;
pub mod value_type;

pub use column::*;
pub use crosstab::*;
pub use error::DefinitionError;
pub use group::*;
pub use options::*;
pub use report::*;
pub use value_type::{IntoValueType, ReportValue, ValueType};
