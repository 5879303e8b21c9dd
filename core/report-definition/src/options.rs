//! FILENAME: core/report-definition/src/options.rs
//! Report-wide options: default styles and page layout.
//!
//! Options deserialize from partial JSON; every missing key takes its default.

use serde::{Deserialize, Serialize};
use report_style::{Border, Color, Font, HorizontalAlign, Style, Transparency, VerticalAlign};

use crate::error::DefinitionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page size in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
}

impl Page {
    pub const fn a4_portrait() -> Self {
        Page { width: 595, height: 842, orientation: Orientation::Portrait }
    }

    pub const fn a4_landscape() -> Self {
        Page { width: 842, height: 595, orientation: Orientation::Landscape }
    }

    pub const fn letter_portrait() -> Self {
        Page { width: 612, height: 792, orientation: Orientation::Portrait }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::a4_portrait()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Margins {
    pub fn uniform(margin: u32) -> Self {
        Margins { top: margin, bottom: margin, left: margin, right: margin }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::uniform(20)
    }
}

/// Defaults and page layout shared by every column of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub page: Page,
    pub margins: Margins,
    pub detail_height: u32,
    pub header_height: u32,
    pub footer_height: u32,
    /// Gap between columns, in points.
    pub column_space: u32,
    pub columns_per_page: u32,
    /// Stretch non-fixed columns to the printable width.
    pub use_full_page_width: bool,
    pub print_background_on_odd_rows: bool,
    pub odd_row_background_style: Style,
    pub default_header_style: Style,
    pub default_detail_style: Style,
    pub default_footer_style: Style,
    pub print_column_names: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            page: Page::default(),
            margins: Margins::default(),
            detail_height: 15,
            header_height: 30,
            footer_height: 30,
            column_space: 0,
            columns_per_page: 1,
            use_full_page_width: false,
            print_background_on_odd_rows: false,
            odd_row_background_style: Style::named("oddRowStyle")
                .with_background(Color::new(240, 240, 240))
                .with_transparency(Transparency::Opaque),
            default_header_style: Style::named("defaultHeaderStyle")
                .with_font(Font::arial_medium_bold())
                .with_horizontal_align(HorizontalAlign::Center)
                .with_vertical_align(VerticalAlign::Middle)
                .with_border_bottom(Border::THIN),
            default_detail_style: Style::named("defaultDetailStyle").with_font(Font::arial_medium()),
            default_footer_style: Style::named("defaultFooterStyle").with_font(Font::arial_small()),
            print_column_names: true,
        }
    }
}

impl ReportOptions {
    /// Load options from a (possibly partial) JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        let options: ReportOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.page.width == 0 || self.page.height == 0 {
            return Err(DefinitionError::InvalidOptions(format!(
                "page size must be positive, got {}x{}",
                self.page.width, self.page.height
            )));
        }
        if self.columns_per_page == 0 {
            return Err(DefinitionError::InvalidOptions(
                "columns_per_page must be at least 1".to_string(),
            ));
        }
        match self.margins.left.checked_add(self.margins.right) {
            Some(horizontal) if horizontal < self.page.width => {}
            _ => {
                return Err(DefinitionError::InvalidOptions(
                    "horizontal margins leave no printable width".to_string(),
                ))
            }
        }
        Ok(())
    }

    /// Width left for columns once the margins are taken.
    pub fn printable_width(&self) -> u32 {
        self.page
            .width
            .saturating_sub(self.margins.left.saturating_add(self.margins.right))
    }
}
