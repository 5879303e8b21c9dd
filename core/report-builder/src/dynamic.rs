//! FILENAME: core/report-builder/src/dynamic.rs
//! The general-purpose report builder.
//!
//! [`DynamicReportBuilder`] owns the report under construction. The
//! [`ReportBuilder`] trait exposes its settings as chainable methods so any
//! builder wrapping it (see `FastReportBuilder`) gets them for free.

use std::collections::HashSet;

use report_definition::{
    column_name_for, Column, ColumnRef, DynamicReport, Group, GroupVariable, Margins, Page,
    ReportField, ReportOptions, ValueType,
};
use report_style::Style;

use crate::engine::{RenderError, ReportEngine};
use crate::error::{BuilderError, BuilderResult};
use crate::logging::{log_debug, log_info, log_warn};

#[derive(Debug, Clone, Default)]
pub struct DynamicReportBuilder {
    report: DynamicReport,
}

impl DynamicReportBuilder {
    pub fn new() -> Self {
        DynamicReportBuilder::default()
    }

    /// Start from previously loaded options (see [`ReportOptions::from_json_str`]).
    pub fn with_options(options: ReportOptions) -> Self {
        let mut builder = DynamicReportBuilder::new();
        builder.report.options = options;
        builder
    }

    pub(crate) fn report_mut(&mut self) -> &mut DynamicReport {
        &mut self.report
    }

    /// Append a column, naming it after its position if it has no name.
    pub(crate) fn push_column(&mut self, mut column: Column) {
        let index = self.report.columns.len();
        if column.name.is_empty() {
            column.name = column_name_for(index);
        }
        log_debug!(
            "COLUMN",
            "added column {} name={} property={} type={}",
            index + 1,
            column.name,
            column.property_name(),
            column.value_type()
        );
        self.report.columns.push(column);
    }

    /// Resolve a 1-based column ordinal.
    pub(crate) fn column_ref(&self, number: usize) -> BuilderResult<ColumnRef> {
        number
            .checked_sub(1)
            .and_then(|index| self.report.columns.get(index).map(|c| ColumnRef::new(index, c)))
            .ok_or(BuilderError::NoSuchColumn {
                number,
                available: self.report.columns.len(),
            })
    }

    /// Resolve a 1-based group ordinal.
    pub(crate) fn group_mut(&mut self, number: usize) -> BuilderResult<&mut Group> {
        let available = self.report.groups.len();
        number
            .checked_sub(1)
            .and_then(|index| self.report.groups.get_mut(index))
            .ok_or(BuilderError::NoSuchGroup { number, available })
    }

    pub(crate) fn group(&self, number: usize) -> BuilderResult<&Group> {
        number
            .checked_sub(1)
            .and_then(|index| self.report.groups.get(index))
            .ok_or(BuilderError::NoSuchGroup {
                number,
                available: self.report.groups.len(),
            })
    }

    /// Validate and hand out the finished definition.
    fn finish(self) -> BuilderResult<DynamicReport> {
        let report = self.report;

        if report.columns.is_empty() {
            log_warn!("BUILDER", "build rejected: report has no columns");
            return Err(BuilderError::EmptyReport);
        }

        {
            let mut names = HashSet::new();
            for column in &report.columns {
                if !names.insert(column.name.as_str()) {
                    return Err(BuilderError::DuplicateColumnName(column.name.clone()));
                }
            }
        }

        let available = report.columns.len();
        let check = |column_ref: &ColumnRef| -> BuilderResult<()> {
            if column_ref.index < available {
                Ok(())
            } else {
                Err(BuilderError::NoSuchColumn {
                    number: column_ref.index + 1,
                    available,
                })
            }
        };
        for group in &report.groups {
            check(&group.criteria)?;
            for variable in group.variables() {
                check(&variable.column)?;
            }
        }
        for variable in report.global_variables.iter() {
            check(&variable.column)?;
        }

        report.options.validate()?;

        log_info!(
            "BUILDER",
            "built report title={:?} columns={} groups={}",
            report.title,
            report.columns.len(),
            report.groups.len()
        );
        Ok(report)
    }
}

/// Chainable report settings shared by every builder.
pub trait ReportBuilder: Sized {
    fn base(&self) -> &DynamicReportBuilder;
    fn base_mut(&mut self) -> &mut DynamicReportBuilder;
    fn into_base(self) -> DynamicReportBuilder;

    /// The report as assembled so far.
    fn report(&self) -> &DynamicReport {
        &self.base().report
    }

    fn title(mut self, title: impl Into<String>) -> Self {
        self.base_mut().report.title = Some(title.into());
        self
    }

    fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.base_mut().report.subtitle = Some(subtitle.into());
        self
    }

    fn title_style(mut self, style: Style) -> Self {
        self.base_mut().report.title_style = style;
        self
    }

    fn subtitle_style(mut self, style: Style) -> Self {
        self.base_mut().report.subtitle_style = style;
        self
    }

    fn page(mut self, page: Page) -> Self {
        self.base_mut().report.options.page = page;
        self
    }

    fn margins(mut self, margins: Margins) -> Self {
        self.base_mut().report.options.margins = margins;
        self
    }

    fn detail_height(mut self, height: u32) -> Self {
        self.base_mut().report.options.detail_height = height;
        self
    }

    fn header_height(mut self, height: u32) -> Self {
        self.base_mut().report.options.header_height = height;
        self
    }

    fn column_space(mut self, space: u32) -> Self {
        self.base_mut().report.options.column_space = space;
        self
    }

    fn columns_per_page(mut self, columns: u32) -> Self {
        self.base_mut().report.options.columns_per_page = columns;
        self
    }

    fn use_full_page_width(mut self, full: bool) -> Self {
        self.base_mut().report.options.use_full_page_width = full;
        self
    }

    fn print_background_on_odd_rows(mut self, print: bool) -> Self {
        self.base_mut().report.options.print_background_on_odd_rows = print;
        self
    }

    fn odd_row_background_style(mut self, style: Style) -> Self {
        self.base_mut().report.options.odd_row_background_style = style;
        self
    }

    fn default_header_style(mut self, style: Style) -> Self {
        self.base_mut().report.options.default_header_style = style;
        self
    }

    fn default_detail_style(mut self, style: Style) -> Self {
        self.base_mut().report.options.default_detail_style = style;
        self
    }

    /// Append a fully built column.
    fn append_column(mut self, column: Column) -> Self {
        self.base_mut().push_column(column);
        self
    }

    /// Append a fully built group. Its criteria is checked at `build()`.
    fn add_group(mut self, group: Group) -> Self {
        log_debug!("GROUP", "added group on column {}", group.criteria.index + 1);
        self.base_mut().report.groups.push(group);
        self
    }

    /// Declare a data-source field that no column shows. Re-declaring a name replaces its type.
    fn add_field(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        let name = name.into();
        let fields = &mut self.base_mut().report.fields;
        match fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value_type = value_type,
            None => fields.push(ReportField { name, value_type }),
        }
        self
    }

    fn add_global_header(mut self, variable: GroupVariable) -> Self {
        self.base_mut().report.global_variables.header.push(variable);
        self
    }

    fn add_global_footer(mut self, variable: GroupVariable) -> Self {
        self.base_mut().report.global_variables.footer.push(variable);
        self
    }

    fn build(self) -> BuilderResult<DynamicReport> {
        self.into_base().finish()
    }

    /// Build, then pass the definition to `engine`.
    fn build_and_render<E: ReportEngine>(self, engine: &E) -> Result<E::Output, RenderError<E::Error>> {
        let report = self.build()?;
        engine.render(&report).map_err(RenderError::Engine)
    }
}

impl ReportBuilder for DynamicReportBuilder {
    fn base(&self) -> &DynamicReportBuilder {
        self
    }

    fn base_mut(&mut self) -> &mut DynamicReportBuilder {
        self
    }

    fn into_base(self) -> DynamicReportBuilder {
        self
    }
}
