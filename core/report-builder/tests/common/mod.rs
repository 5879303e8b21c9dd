//! FILENAME: tests/common/mod.rs
//! Fixtures for report builder integration tests.

#![allow(dead_code)]

use report_builder::{BuilderResult, FastReportBuilder, ReportBuilder};
use report_definition::{ColumnRef, DynamicReport, ValueType};

/// A sales report skeleton: state, branch, product, item, amount, quantity, date.
pub fn sales_builder() -> BuilderResult<FastReportBuilder> {
    FastReportBuilder::new()
        .title("November sales report")
        .subtitle("Generated by the fast builder")
        .add_column("State", "state", ValueType::String, 30)?
        .add_column("Branch", "branch", ValueType::String, 30)?
        .add_column("Product Line", "product_line", "string", 50)?
        .add_column("Item", "item", "string", 50)?
        .add_column("Amount", "amount", "decimal", 60)?
        .add_column("Quantity", "quantity", "long", 40)?
        .add_fixed_column("Date", "date", "date", 40, true)
}

/// Properties of the columns that `report`'s groups break on.
pub fn criteria_properties(report: &DynamicReport) -> Vec<String> {
    report.groups.iter().map(|g| g.criteria.property.clone()).collect()
}

pub fn column_ref(index: usize, property: &str) -> ColumnRef {
    ColumnRef {
        index,
        property: property.to_string(),
    }
}
