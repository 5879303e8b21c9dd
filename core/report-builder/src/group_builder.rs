//! FILENAME: core/report-builder/src/group_builder.rs
//! Builds a single [`Group`].

use report_definition::{Column, ColumnRef, Group, GroupLayout, GroupVariable};

use crate::error::{BuilderError, BuilderResult};

#[derive(Debug, Clone, Default)]
pub struct GroupBuilder {
    criteria: Option<ColumnRef>,
    layout: GroupLayout,
    header_height: Option<u32>,
    footer_height: Option<u32>,
    start_in_new_page: bool,
    header_variables: Vec<GroupVariable>,
    footer_variables: Vec<GroupVariable>,
}

impl GroupBuilder {
    pub fn new() -> Self {
        GroupBuilder::default()
    }

    /// `index` is the column's 0-based position in the report.
    pub fn criteria_column(mut self, index: usize, column: &Column) -> Self {
        self.criteria = Some(ColumnRef::new(index, column));
        self
    }

    pub fn layout(mut self, layout: GroupLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn header_height(mut self, height: u32) -> Self {
        self.header_height = Some(height);
        self
    }

    pub fn footer_height(mut self, height: u32) -> Self {
        self.footer_height = Some(height);
        self
    }

    pub fn start_in_new_page(mut self, start: bool) -> Self {
        self.start_in_new_page = start;
        self
    }

    pub fn add_header_variable(mut self, variable: GroupVariable) -> Self {
        self.header_variables.push(variable);
        self
    }

    pub fn add_footer_variable(mut self, variable: GroupVariable) -> Self {
        self.footer_variables.push(variable);
        self
    }

    pub fn build(self) -> BuilderResult<Group> {
        let criteria = self.criteria.ok_or(BuilderError::MissingCriteria)?;
        let mut group = Group::new(criteria);
        group.layout = self.layout;
        group.header_height = self.header_height;
        group.footer_height = self.footer_height;
        group.start_in_new_page = self.start_in_new_page;
        group.header_variables = self.header_variables;
        group.footer_variables = self.footer_variables;
        Ok(group)
    }
}
