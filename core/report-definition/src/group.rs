//! FILENAME: core/report-definition/src/group.rs
//! Groups and the variables computed in their headers and footers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use report_style::Style;

use crate::column::ColumnRef;
use crate::crosstab::Crosstab;

// ============================================================================
// CALCULATION
// ============================================================================

/// Aggregate operations the engine can compute for a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Calculation {
    #[default]
    Sum,
    Count,
    DistinctCount,
    Average,
    Lowest,
    Highest,
    StandardDeviation,
    Variance,
    First,
    /// No aggregation: the current value.
    Nothing,
}

// ============================================================================
// LAYOUT
// ============================================================================

/// How a group break is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GroupLayout {
    /// Value printed in its column on the first row of the group.
    #[default]
    Default,
    /// As `Default`, repeating the column headers per group.
    DefaultWithHeader,
    /// Value printed in the group header.
    ValueInHeader,
    ValueInHeaderWithHeaders,
    /// Value in the group header and on every detail row.
    ValueInHeaderAndForEach,
    ValueInHeaderAndForEachWithHeaders,
    /// Value printed on every detail row.
    ValueForEach,
    ValueForEachWithHeaders,
    /// Break without printing anything.
    Empty,
}

// ============================================================================
// VALUE FORMATTER
// ============================================================================

/// Turns a computed variable value into display text at render time.
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: &serde_json::Value) -> String;
}

/// Adapts a closure into a [`ValueFormatter`].
pub struct FnFormatter<F>(pub F);

impl<F> ValueFormatter for FnFormatter<F>
where
    F: Fn(&serde_json::Value) -> String + Send + Sync,
{
    fn format(&self, value: &serde_json::Value) -> String {
        (self.0)(value)
    }
}

// ============================================================================
// GROUP VARIABLE
// ============================================================================

/// An aggregate shown in a group (or report-wide) header or footer.
#[derive(Clone, Serialize, Deserialize)]
pub struct GroupVariable {
    pub column: ColumnRef,
    pub operation: Calculation,
    pub style: Style,

    /// Runtime-only; not part of the saved definition.
    #[serde(skip)]
    pub value_formatter: Option<Arc<dyn ValueFormatter>>,
}

impl GroupVariable {
    pub fn new(column: ColumnRef, operation: Calculation, style: Style) -> Self {
        GroupVariable {
            column,
            operation,
            style,
            value_formatter: None,
        }
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn ValueFormatter>) -> Self {
        self.value_formatter = Some(formatter);
        self
    }

    pub fn has_formatter(&self) -> bool {
        self.value_formatter.is_some()
    }
}

impl fmt::Debug for GroupVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupVariable")
            .field("column", &self.column)
            .field("operation", &self.operation)
            .field("style", &self.style.name)
            .field("value_formatter", &self.value_formatter.is_some())
            .finish()
    }
}

// ============================================================================
// GROUP
// ============================================================================

/// A break level keyed by the value of its criteria column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub criteria: ColumnRef,
    pub layout: GroupLayout,
    pub header_variables: Vec<GroupVariable>,
    pub footer_variables: Vec<GroupVariable>,
    pub header_crosstabs: Vec<Crosstab>,
    pub footer_crosstabs: Vec<Crosstab>,
    pub header_height: Option<u32>,
    pub footer_height: Option<u32>,
    /// Start every group instance on a new page.
    #[serde(default)]
    pub start_in_new_page: bool,
}

impl Group {
    pub fn new(criteria: ColumnRef) -> Self {
        Group {
            criteria,
            layout: GroupLayout::default(),
            header_variables: Vec::new(),
            footer_variables: Vec::new(),
            header_crosstabs: Vec::new(),
            footer_crosstabs: Vec::new(),
            header_height: None,
            footer_height: None,
            start_in_new_page: false,
        }
    }

    pub fn add_header_variable(&mut self, variable: GroupVariable) {
        self.header_variables.push(variable);
    }

    pub fn add_footer_variable(&mut self, variable: GroupVariable) {
        self.footer_variables.push(variable);
    }

    /// All variables, header first.
    pub fn variables(&self) -> impl Iterator<Item = &GroupVariable> {
        self.header_variables.iter().chain(self.footer_variables.iter())
    }
}

/// Report-wide variables, printed once at the top and bottom of the report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GlobalVariables {
    pub header: Vec<GroupVariable>,
    pub footer: Vec<GroupVariable>,
}

impl GlobalVariables {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.footer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupVariable> {
        self.header.iter().chain(self.footer.iter())
    }
}
