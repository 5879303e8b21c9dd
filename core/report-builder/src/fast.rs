//! FILENAME: core/report-builder/src/fast.rs
//! PURPOSE: Shortcut builder that creates columns from a handful of arguments.
//! CONTEXT: Columns added without an explicit style get one inferred from their
//! value type (see `inference`). Groups and variables are addressed by 1-based
//! ordinals, the way a report author counts them.

use std::sync::Arc;

use report_definition::{
    BarcodeOptions, BarcodeType, Calculation, Column, Crosstab, Group, GroupLayout,
    GroupVariable, IntoValueType, ValueFormatter, ValueType,
};
use report_style::{
    Border, Color, Font, HorizontalAlign, ImageScaleMode, Style, Transparency, VerticalAlign,
};

use crate::column_builder::ColumnBuilder;
use crate::dynamic::{DynamicReportBuilder, ReportBuilder};
use crate::error::{BuilderError, BuilderResult};
use crate::group_builder::GroupBuilder;
use crate::inference::StyleInference;
use crate::logging::{log_debug, log_warn};

/// Usage:
///
/// ```
/// use report_builder::{FastReportBuilder, ReportBuilder};
/// use report_definition::Calculation;
///
/// let report = FastReportBuilder::new()
///     .title("Sales by state")
///     .add_column("State", "state", "string", 30)?
///     .add_column("Amount", "amount", "decimal", 60)?
///     .add_groups(1)?
///     .add_footer_variable(1, 2, Calculation::Sum, None)?
///     .build()?;
///
/// assert_eq!(report.groups.len(), 1);
/// # Ok::<(), report_builder::BuilderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FastReportBuilder {
    base: DynamicReportBuilder,
    inference: StyleInference,
}

impl Default for FastReportBuilder {
    fn default() -> Self {
        FastReportBuilder::new()
    }
}

impl FastReportBuilder {
    pub fn new() -> Self {
        FastReportBuilder::from_base(DynamicReportBuilder::new())
    }

    /// Wrap an existing builder, installing the fast-builder default styles.
    pub fn from_base(mut base: DynamicReportBuilder) -> Self {
        let report = base.report_mut();

        let header = report.options.default_header_style.clone();
        report.options.default_header_style = header
            .with_font(Font::arial_medium_bold())
            .with_horizontal_align(HorizontalAlign::Center)
            .with_border_bottom(Border::THIN)
            .with_vertical_align(VerticalAlign::Middle)
            .with_background(Color::LIGHT_GRAY)
            .with_transparency(Transparency::Opaque);

        let title = report.title_style.clone();
        report.title_style = title
            .with_font(Font::arial_big_bold())
            .with_horizontal_align(HorizontalAlign::Center)
            .with_vertical_align(VerticalAlign::Top);

        FastReportBuilder {
            base,
            inference: StyleInference::default(),
        }
    }

    /// Replace the style given to decimal, float and double columns.
    pub fn with_currency_style(mut self, style: Style) -> Self {
        self.inference.currency_style = style;
        self
    }

    /// Replace the style given to integer and long columns, and to variables without a style.
    pub fn with_number_style(mut self, style: Style) -> Self {
        self.inference.number_style = style;
        self
    }

    pub fn currency_style(&self) -> &Style {
        &self.inference.currency_style
    }

    pub fn number_style(&self) -> &Style {
        &self.inference.number_style
    }

    /// Apply type-based style inference to `column`.
    pub fn infer_style(&self, column: &mut Column) -> bool {
        self.inference.apply(column)
    }

    fn column_builder(
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
    ) -> BuilderResult<ColumnBuilder> {
        Ok(ColumnBuilder::new()
            .property(property, value_type.into_value_type()?)
            .width(width)
            .title(title))
    }

    fn push(mut self, column: Column) -> Self {
        self.base.push_column(column);
        self
    }

    fn push_inferred(self, mut column: Column) -> Self {
        self.infer_style(&mut column);
        self.push(column)
    }

    /// Infer when no style was given, keep the given one otherwise.
    fn push_styled(self, column: Column, explicit_style: bool) -> Self {
        if explicit_style {
            self.push(column)
        } else {
            self.push_inferred(column)
        }
    }

    // ========================================================================
    // COLUMNS
    // ========================================================================

    pub fn add_column(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
    ) -> BuilderResult<Self> {
        let column = Self::column_builder(title, property, value_type, width)?.build()?;
        Ok(self.push_inferred(column))
    }

    /// Adds a column with an explicit style; no inference.
    pub fn add_column_with_style(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
        style: Style,
    ) -> BuilderResult<Self> {
        let column = Self::column_builder(title, property, value_type, width)?
            .style(style)
            .build()?;
        Ok(self.push(column))
    }

    /// Adds a column with optional detail and header styles; no inference either way.
    pub fn add_column_with_styles(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
        style: Option<Style>,
        header_style: Option<Style>,
    ) -> BuilderResult<Self> {
        let mut builder = Self::column_builder(title, property, value_type, width)?;
        if let Some(style) = style {
            builder = builder.style(style);
        }
        if let Some(header_style) = header_style {
            builder = builder.header_style(header_style);
        }
        Ok(self.push(builder.build()?))
    }

    pub fn add_fixed_column(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
        fixed_width: bool,
    ) -> BuilderResult<Self> {
        let column = Self::column_builder(title, property, value_type, width)?
            .fixed_width(fixed_width)
            .build()?;
        Ok(self.push_inferred(column))
    }

    /// The given pattern survives inference; only the style is inferred.
    pub fn add_pattern_column(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
        fixed_width: bool,
        pattern: impl Into<String>,
    ) -> BuilderResult<Self> {
        let column = Self::column_builder(title, property, value_type, width)?
            .fixed_width(fixed_width)
            .pattern(pattern)
            .build()?;
        Ok(self.push_inferred(column))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_formatted_column(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
        fixed_width: bool,
        pattern: Option<&str>,
        style: Option<Style>,
    ) -> BuilderResult<Self> {
        self.add_described_column(title, property, value_type, width, fixed_width, pattern, style, None)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_described_column(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
        fixed_width: bool,
        pattern: Option<&str>,
        style: Option<Style>,
        field_description: Option<&str>,
    ) -> BuilderResult<Self> {
        let mut builder = Self::column_builder(title, property, value_type, width)?.fixed_width(fixed_width);
        if let Some(pattern) = pattern {
            builder = builder.pattern(pattern);
        }
        if let Some(description) = field_description {
            builder = builder.field_description(description);
        }
        let explicit_style = style.is_some();
        if let Some(style) = style {
            builder = builder.style(style);
        }
        Ok(self.push_styled(builder.build()?, explicit_style))
    }

    /// Image column fed from a binary stream.
    pub fn add_image_column(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        width: u32,
        fixed_width: bool,
        scale_mode: ImageScaleMode,
    ) -> BuilderResult<Self> {
        self.add_image_column_with_type(title, property, ValueType::Binary, width, fixed_width, scale_mode, None)
    }

    /// `value_type` must be [`ValueType::Binary`] or [`ValueType::Image`].
    #[allow(clippy::too_many_arguments)]
    pub fn add_image_column_with_type(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        width: u32,
        fixed_width: bool,
        scale_mode: ImageScaleMode,
        style: Option<Style>,
    ) -> BuilderResult<Self> {
        let mut builder = Self::column_builder(title, property, value_type, width)?
            .fixed_width(fixed_width)
            .image(scale_mode);
        let explicit_style = style.is_some();
        if let Some(style) = style {
            builder = builder.style(style);
        }
        Ok(self.push_styled(builder.build()?, explicit_style))
    }

    /// Barcode columns never get an inferred style.
    #[allow(clippy::too_many_arguments)]
    pub fn add_barcode_column(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        barcode_type: BarcodeType,
        show_text: bool,
        width: u32,
        fixed_width: bool,
        scale_mode: ImageScaleMode,
    ) -> BuilderResult<Self> {
        let options = BarcodeOptions::new(barcode_type)
            .with_show_text(show_text)
            .with_scale_mode(scale_mode);
        self.add_barcode_column_with_options(title, property, value_type, options, width, fixed_width, None)
    }

    /// The application identifier property, if any, is declared as an extra report field.
    #[allow(clippy::too_many_arguments)]
    pub fn add_barcode_column_with_options(
        self,
        title: impl Into<String>,
        property: impl Into<String>,
        value_type: impl IntoValueType,
        options: BarcodeOptions,
        width: u32,
        fixed_width: bool,
        style: Option<Style>,
    ) -> BuilderResult<Self> {
        if options.application_identifier.is_some() && !options.barcode_type.supports_application_identifier() {
            log_warn!(
                "COLUMN",
                "application identifier ignored by {:?} barcodes",
                options.barcode_type
            );
        }
        let identifier = options.application_identifier.clone();

        let mut builder = Self::column_builder(title, property, value_type, width)?
            .fixed_width(fixed_width)
            .barcode(options);
        if let Some(style) = style {
            builder = builder.style(style);
        }
        let column = builder.build()?;

        let builder = match identifier {
            Some(identifier) => self.add_field(identifier, ValueType::Object),
            None => self,
        };
        Ok(builder.push(column))
    }

    // ========================================================================
    // GROUPS
    // ========================================================================

    /// Group by the first `count` columns, outermost first.
    pub fn add_groups(self, count: usize) -> BuilderResult<Self> {
        self.add_groups_with_layout(count, GroupLayout::default())
    }

    /// Fails without touching the report when fewer than `count` columns exist.
    pub fn add_groups_with_layout(mut self, count: usize, layout: GroupLayout) -> BuilderResult<Self> {
        let available = self.report().columns.len();
        if count > available {
            log_warn!("GROUP", "cannot group by {} columns, only {} defined", count, available);
            return Err(BuilderError::NoSuchColumn { number: count, available });
        }

        let groups = self.report().columns[..count]
            .iter()
            .enumerate()
            .map(|(index, column)| {
                GroupBuilder::new()
                    .criteria_column(index, column)
                    .layout(layout)
                    .build()
            })
            .collect::<BuilderResult<Vec<Group>>>()?;

        log_debug!("GROUP", "added {} groups with layout {:?}", groups.len(), layout);
        self.base.report_mut().groups.extend(groups);
        Ok(self)
    }

    pub fn set_group_layout(mut self, group_number: usize, layout: GroupLayout) -> BuilderResult<Self> {
        self.base.group_mut(group_number)?.layout = layout;
        Ok(self)
    }

    /// Group by 1-based ordinal.
    pub fn group(&self, group_number: usize) -> BuilderResult<&Group> {
        self.base.group(group_number)
    }

    pub fn group_count(&self) -> usize {
        self.report().groups.len()
    }

    // ========================================================================
    // VARIABLES
    // ========================================================================

    fn variable(&self, column_number: usize, operation: Calculation, style: Option<Style>) -> BuilderResult<GroupVariable> {
        let column = self.base.column_ref(column_number)?;
        let style = style.unwrap_or_else(|| self.inference.number_style.clone());
        Ok(GroupVariable::new(column, operation, style))
    }

    /// Report-wide variable printed before the first detail row.
    pub fn add_global_header_variable(
        self,
        column_number: usize,
        operation: Calculation,
        style: Option<Style>,
    ) -> BuilderResult<Self> {
        let variable = self.variable(column_number, operation, style)?;
        Ok(self.add_global_header(variable))
    }

    /// Report-wide variable printed after the last detail row.
    pub fn add_global_footer_variable(
        self,
        column_number: usize,
        operation: Calculation,
        style: Option<Style>,
    ) -> BuilderResult<Self> {
        let variable = self.variable(column_number, operation, style)?;
        Ok(self.add_global_footer(variable))
    }

    pub fn add_header_variable(
        mut self,
        group_number: usize,
        column_number: usize,
        operation: Calculation,
        style: Option<Style>,
    ) -> BuilderResult<Self> {
        self.base.group(group_number)?;
        let variable = self.variable(column_number, operation, style)?;
        self.base.group_mut(group_number)?.add_header_variable(variable);
        Ok(self)
    }

    pub fn add_footer_variable(
        mut self,
        group_number: usize,
        column_number: usize,
        operation: Calculation,
        style: Option<Style>,
    ) -> BuilderResult<Self> {
        self.base.group(group_number)?;
        let variable = self.variable(column_number, operation, style)?;
        self.base.group_mut(group_number)?.add_footer_variable(variable);
        Ok(self)
    }

    pub fn add_footer_variable_with_formatter(
        mut self,
        group_number: usize,
        column_number: usize,
        operation: Calculation,
        style: Option<Style>,
        formatter: Arc<dyn ValueFormatter>,
    ) -> BuilderResult<Self> {
        self.base.group(group_number)?;
        let variable = self
            .variable(column_number, operation, style)?
            .with_formatter(formatter);
        self.base.group_mut(group_number)?.add_footer_variable(variable);
        Ok(self)
    }

    // ========================================================================
    // CROSSTABS
    // ========================================================================

    pub fn add_header_crosstab(mut self, group_number: usize, crosstab: Crosstab) -> BuilderResult<Self> {
        warn_if_incomplete(&crosstab);
        self.base.group_mut(group_number)?.header_crosstabs.push(crosstab);
        Ok(self)
    }

    pub fn add_footer_crosstab(mut self, group_number: usize, crosstab: Crosstab) -> BuilderResult<Self> {
        warn_if_incomplete(&crosstab);
        self.base.group_mut(group_number)?.footer_crosstabs.push(crosstab);
        Ok(self)
    }
}

fn warn_if_incomplete(crosstab: &Crosstab) {
    if !crosstab.is_complete() {
        log_warn!(
            "GROUP",
            "crosstab {:?} lacks rows, columns or measures; the engine may reject it",
            crosstab.title
        );
    }
}

impl ReportBuilder for FastReportBuilder {
    fn base(&self) -> &DynamicReportBuilder {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DynamicReportBuilder {
        &mut self.base
    }

    fn into_base(self) -> DynamicReportBuilder {
        self.base
    }
}
