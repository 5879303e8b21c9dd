//! FILENAME: core/report-builder/tests/test_groups.rs
//! PURPOSE: Tests for group creation, ordinal lookup and variable wiring.

mod common;

use std::sync::Arc;

use common::{column_ref, criteria_properties, sales_builder};
use report_builder::{BuilderError, FastReportBuilder, ReportBuilder};
use report_definition::{
    Calculation, Crosstab, CrosstabDimension, CrosstabMeasure, FnFormatter, GroupLayout, ValueType,
};
use report_style::Style;

// ============================================================================
// add_groups
// ============================================================================

#[test]
fn test_groups_claim_first_columns_in_order() {
    for n in 0..=7 {
        let builder = sales_builder().unwrap().add_groups(n).unwrap();
        let report = builder.report();
        assert_eq!(report.groups.len(), n);
        for (i, group) in report.groups.iter().enumerate() {
            assert_eq!(group.criteria.index, i);
            assert_eq!(group.criteria.property, report.columns[i].property.property);
        }
    }
}

#[test]
fn test_groups_criteria_properties() {
    let builder = sales_builder().unwrap().add_groups(2).unwrap();
    assert_eq!(criteria_properties(builder.report()), vec!["state", "branch"]);
}

#[test]
fn test_groups_with_layout() {
    let builder = sales_builder()
        .unwrap()
        .add_groups_with_layout(2, GroupLayout::ValueInHeaderWithHeaders)
        .unwrap();
    assert!(builder
        .report()
        .groups
        .iter()
        .all(|g| g.layout == GroupLayout::ValueInHeaderWithHeaders));
}

#[test]
fn test_more_groups_than_columns_fails_cleanly() {
    let err = FastReportBuilder::new()
        .add_column("State", "state", "string", 30)
        .unwrap()
        .add_groups(2)
        .unwrap_err();
    assert!(matches!(err, BuilderError::NoSuchColumn { number: 2, available: 1 }));
}

#[test]
fn test_groups_append_on_repeat() {
    let builder = sales_builder().unwrap().add_groups(1).unwrap().add_groups(2).unwrap();
    assert_eq!(criteria_properties(builder.report()), vec!["state", "state", "branch"]);
}

// ============================================================================
// ordinal lookup
// ============================================================================

#[test]
fn test_missing_group_ordinal_fails() {
    let builder = sales_builder().unwrap().add_groups(2).unwrap();
    for k in [0, 3, 10] {
        let err = builder
            .clone()
            .add_footer_variable(k, 5, Calculation::Sum, None)
            .unwrap_err();
        assert!(
            matches!(err, BuilderError::NoSuchGroup { number, available: 2 } if number == k),
            "ordinal {} gave {:?}",
            k,
            err
        );
    }
}

#[test]
fn test_no_such_group_message() {
    let err = sales_builder()
        .unwrap()
        .set_group_layout(1, GroupLayout::Empty)
        .unwrap_err();
    assert!(err.to_string().contains("use add_groups first"));
}

#[test]
fn test_group_accessor() {
    let builder = sales_builder().unwrap().add_groups(2).unwrap();
    assert_eq!(builder.group(2).unwrap().criteria, column_ref(1, "branch"));
    assert!(builder.group(3).is_err());
    assert_eq!(builder.group_count(), 2);
}

#[test]
fn test_set_group_layout() {
    let builder = sales_builder()
        .unwrap()
        .add_groups(2)
        .unwrap()
        .set_group_layout(2, GroupLayout::ValueForEach)
        .unwrap();
    assert_eq!(builder.group(1).unwrap().layout, GroupLayout::Default);
    assert_eq!(builder.group(2).unwrap().layout, GroupLayout::ValueForEach);
}

// ============================================================================
// variables
// ============================================================================

#[test]
fn test_header_and_footer_variables() {
    let builder = sales_builder()
        .unwrap()
        .add_groups(2)
        .unwrap()
        .add_header_variable(1, 5, Calculation::Sum, None)
        .unwrap()
        .add_footer_variable(1, 6, Calculation::Count, Some(Style::named("countStyle")))
        .unwrap()
        .add_footer_variable(2, 5, Calculation::Average, None)
        .unwrap();

    let first = builder.group(1).unwrap();
    assert_eq!(first.header_variables.len(), 1);
    assert_eq!(first.header_variables[0].column, column_ref(4, "amount"));
    assert_eq!(&first.header_variables[0].style, builder.number_style());
    assert_eq!(first.footer_variables[0].column, column_ref(5, "quantity"));
    assert_eq!(first.footer_variables[0].style.name.as_deref(), Some("countStyle"));

    let second = builder.group(2).unwrap();
    assert!(second.header_variables.is_empty());
    assert_eq!(second.footer_variables[0].operation, Calculation::Average);
}

#[test]
fn test_variable_column_out_of_range() {
    let builder = sales_builder().unwrap().add_groups(1).unwrap();
    let err = builder
        .clone()
        .add_header_variable(1, 8, Calculation::Sum, None)
        .unwrap_err();
    assert!(matches!(err, BuilderError::NoSuchColumn { number: 8, available: 7 }));

    let err = builder.add_global_footer_variable(0, Calculation::Sum, None).unwrap_err();
    assert!(matches!(err, BuilderError::NoSuchColumn { number: 0, .. }));
}

#[test]
fn test_group_checked_before_column() {
    let err = sales_builder()
        .unwrap()
        .add_footer_variable(1, 99, Calculation::Sum, None)
        .unwrap_err();
    assert!(matches!(err, BuilderError::NoSuchGroup { number: 1, available: 0 }));
}

#[test]
fn test_global_variables() {
    let builder = sales_builder()
        .unwrap()
        .add_global_header_variable(5, Calculation::Sum, None)
        .unwrap()
        .add_global_footer_variable(6, Calculation::Highest, None)
        .unwrap();
    let globals = &builder.report().global_variables;
    assert_eq!(globals.header.len(), 1);
    assert_eq!(globals.footer[0].column, column_ref(5, "quantity"));
    assert_eq!(globals.footer[0].operation, Calculation::Highest);
    assert_eq!(&globals.footer[0].style, builder.number_style());
}

#[test]
fn test_footer_variable_with_formatter() {
    let formatter = Arc::new(FnFormatter(|v: &serde_json::Value| format!("Total: {}", v)));
    let builder = sales_builder()
        .unwrap()
        .add_groups(1)
        .unwrap()
        .add_footer_variable_with_formatter(1, 5, Calculation::Sum, None, formatter)
        .unwrap();

    let variable = &builder.group(1).unwrap().footer_variables[0];
    let formatted = variable
        .value_formatter
        .as_ref()
        .map(|f| f.format(&serde_json::json!(12.5)));
    assert_eq!(formatted.as_deref(), Some("Total: 12.5"));
}

// ============================================================================
// crosstabs
// ============================================================================

fn sample_crosstab() -> Crosstab {
    Crosstab::new()
        .with_title("Items by branch")
        .add_row(CrosstabDimension::new("item", ValueType::String, "Item").with_totals(true))
        .add_column(CrosstabDimension::new("branch", ValueType::String, "Branch"))
        .add_measure(CrosstabMeasure::new("amount", ValueType::Decimal, Calculation::Sum))
        .with_size(400, 200)
}

#[test]
fn test_crosstabs_attach_to_groups() {
    let builder = sales_builder()
        .unwrap()
        .add_groups(2)
        .unwrap()
        .add_header_crosstab(1, sample_crosstab())
        .unwrap()
        .add_footer_crosstab(2, sample_crosstab())
        .unwrap()
        .add_footer_crosstab(2, Crosstab::new())
        .unwrap();

    assert_eq!(builder.group(1).unwrap().header_crosstabs.len(), 1);
    assert!(builder.group(1).unwrap().footer_crosstabs.is_empty());
    assert_eq!(builder.group(2).unwrap().footer_crosstabs.len(), 2);
    assert!(builder.group(2).unwrap().footer_crosstabs[0].is_complete());
}

#[test]
fn test_crosstab_needs_group() {
    let err = sales_builder()
        .unwrap()
        .add_header_crosstab(1, sample_crosstab())
        .unwrap_err();
    assert!(matches!(err, BuilderError::NoSuchGroup { number: 1, .. }));
}
