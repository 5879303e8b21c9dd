//! FILENAME: core/report-definition/src/crosstab.rs
//! Crosstabs attached to group headers and footers.
//!
//! The builders only carry crosstabs through to the engine; the pivot itself is
//! computed at render time.

use serde::{Deserialize, Serialize};
use report_style::Style;

use crate::group::Calculation;
use crate::value_type::ValueType;

/// A row or column dimension of a crosstab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosstabDimension {
    pub property: String,
    pub value_type: ValueType,
    pub title: String,
    /// Render a total row/column for this dimension.
    pub show_totals: bool,
    /// Size of the header cell (height for rows, width for columns).
    pub header_size: u32,
}

impl CrosstabDimension {
    pub fn new(property: impl Into<String>, value_type: ValueType, title: impl Into<String>) -> Self {
        CrosstabDimension {
            property: property.into(),
            value_type,
            title: title.into(),
            show_totals: false,
            header_size: 30,
        }
    }

    pub fn with_totals(mut self, show_totals: bool) -> Self {
        self.show_totals = show_totals;
        self
    }
}

/// A measure aggregated in every crosstab cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosstabMeasure {
    pub property: String,
    pub value_type: ValueType,
    pub operation: Calculation,
    pub title: Option<String>,
    pub pattern: Option<String>,
}

impl CrosstabMeasure {
    pub fn new(property: impl Into<String>, value_type: ValueType, operation: Calculation) -> Self {
        CrosstabMeasure {
            property: property.into(),
            value_type,
            operation,
            title: None,
            pattern: None,
        }
    }
}

/// A pivot-table-like sub-report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Crosstab {
    pub title: Option<String>,
    pub rows: Vec<CrosstabDimension>,
    pub columns: Vec<CrosstabDimension>,
    pub measures: Vec<CrosstabMeasure>,
    pub width: u32,
    pub height: u32,
    /// Stretch to the available page width instead of `width`.
    pub use_full_width: bool,
    pub header_style: Option<Style>,
}

impl Crosstab {
    pub fn new() -> Self {
        Crosstab::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_row(mut self, row: CrosstabDimension) -> Self {
        self.rows.push(row);
        self
    }

    pub fn add_column(mut self, column: CrosstabDimension) -> Self {
        self.columns.push(column);
        self
    }

    pub fn add_measure(mut self, measure: CrosstabMeasure) -> Self {
        self.measures.push(measure);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_full_width(mut self, use_full_width: bool) -> Self {
        self.use_full_width = use_full_width;
        self
    }

    /// A crosstab needs at least one dimension on each axis and one measure.
    pub fn is_complete(&self) -> bool {
        !self.rows.is_empty() && !self.columns.is_empty() && !self.measures.is_empty()
    }
}
