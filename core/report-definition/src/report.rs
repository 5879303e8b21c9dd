//! FILENAME: core/report-definition/src/report.rs
//! The complete report definition.
//!
//! This is the value handed to the rendering engine. It is designed to be:
//! - Serializable (the engine may run out of process)
//! - Assembled incrementally by the builders
//! - Read-only once `build()` has returned it

use serde::{Deserialize, Serialize};
use report_style::Style;

use crate::column::{Column, ColumnRef};
use crate::error::DefinitionError;
use crate::group::{GlobalVariables, Group};
use crate::options::ReportOptions;
use crate::value_type::ValueType;

/// A data-source field the report needs without showing it as a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportField {
    pub name: String,
    pub value_type: ValueType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicReport {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub title_style: Style,
    pub subtitle_style: Style,

    /// Detail columns in declaration order.
    pub columns: Vec<Column>,

    /// Group levels from outer to inner.
    pub groups: Vec<Group>,

    #[serde(default)]
    pub global_variables: GlobalVariables,

    #[serde(default)]
    pub fields: Vec<ReportField>,

    pub options: ReportOptions,
}

impl Default for DynamicReport {
    fn default() -> Self {
        DynamicReport::new()
    }
}

impl DynamicReport {
    pub fn new() -> Self {
        DynamicReport {
            title: None,
            subtitle: None,
            title_style: Style::named("titleStyle"),
            subtitle_style: Style::named("subtitleStyle"),
            columns: Vec::new(),
            groups: Vec::new(),
            global_variables: GlobalVariables::default(),
            fields: Vec::new(),
            options: ReportOptions::default(),
        }
    }

    /// Column referenced by `column_ref`, if it still exists.
    pub fn column(&self, column_ref: &ColumnRef) -> Option<&Column> {
        self.columns.get(column_ref.index)
    }

    /// Criteria column of `group`.
    pub fn criteria_column(&self, group: &Group) -> Option<&Column> {
        self.column(&group.criteria)
    }

    pub fn field(&self, name: &str) -> Option<&ReportField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Sum of the column widths plus the gaps between them.
    pub fn total_width(&self) -> u32 {
        let widths = self.columns.iter().fold(0u32, |acc, c| acc.saturating_add(c.width));
        let gap_count = u32::try_from(self.columns.len().saturating_sub(1)).unwrap_or(u32::MAX);
        widths.saturating_add(gap_count.saturating_mul(self.options.column_space))
    }

    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnKind, ColumnProperty};

    fn column(width: u32) -> Column {
        Column {
            name: String::new(),
            title: "w".to_string(),
            property: ColumnProperty::new("w", ValueType::Long),
            width,
            fixed_width: false,
            pattern: None,
            style: None,
            header_style: None,
            kind: ColumnKind::Property,
        }
    }

    #[test]
    fn test_total_width_counts_gaps() {
        let mut report = DynamicReport::new();
        report.options.column_space = 5;
        report.columns = vec![column(10), column(20), column(30)];
        assert_eq!(report.total_width(), 70);
    }

    #[test]
    fn test_total_width_saturates() {
        let mut report = DynamicReport::new();
        report.columns = vec![column(u32::MAX), column(2)];
        assert_eq!(report.total_width(), u32::MAX);

        report.columns = vec![column(1), column(1)];
        report.options.column_space = u32::MAX;
        assert_eq!(report.total_width(), u32::MAX);
    }
}
