//! FILENAME: core/report-definition/src/column.rs
//! Report columns.
//!
//! A column binds one source property to a slot in the detail band. Image and
//! barcode columns are property columns with extra rendering options.

use serde::{Deserialize, Serialize};
use report_style::{ImageScaleMode, Style};

use crate::value_type::ValueType;

/// Prefix of the unique names assigned to columns when they join a report.
pub const COLUMN_NAME_PREFIX: &str = "COLUMN_";

/// The source property a column reads its value from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProperty {
    /// Property (field) name in the data source.
    pub property: String,

    /// Declared value type of the property.
    pub value_type: ValueType,

    /// Optional description used by data sources that address fields by path.
    #[serde(default)]
    pub field_description: Option<String>,
}

impl ColumnProperty {
    pub fn new(property: impl Into<String>, value_type: ValueType) -> Self {
        ColumnProperty {
            property: property.into(),
            value_type,
            field_description: None,
        }
    }
}

/// Barcode symbologies understood by the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodeType {
    TwoOfSeven,
    ThreeOfNine,
    Bookland,
    Codabar,
    Code128,
    Code128A,
    Code128B,
    Code128C,
    Code39,
    Code39Extended,
    Ean128,
    Ean13,
    GlobalTradeItemNumber,
    Interleaved2Of5,
    Monarch,
    Nw7,
    Pdf417,
    Scc14,
    ShipmentIdentificationNumber,
    Sscc18,
    Std2Of5,
    Ucc128,
    Upca,
    Usd3,
    Usd4,
    Usps,
}

impl BarcodeType {
    /// Symbologies that carry a GS1 application identifier.
    pub fn supports_application_identifier(&self) -> bool {
        matches!(self, BarcodeType::Ucc128 | BarcodeType::Ean128)
    }
}

/// Rendering options of a barcode column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeOptions {
    pub barcode_type: BarcodeType,
    pub show_text: bool,
    pub check_sum: bool,
    /// Property holding the application identifier (UCC-128 only).
    pub application_identifier: Option<String>,
    pub scale_mode: ImageScaleMode,
}

impl BarcodeOptions {
    pub fn new(barcode_type: BarcodeType) -> Self {
        BarcodeOptions {
            barcode_type,
            show_text: false,
            check_sum: false,
            application_identifier: None,
            scale_mode: ImageScaleMode::default(),
        }
    }

    pub fn with_show_text(mut self, show_text: bool) -> Self {
        self.show_text = show_text;
        self
    }

    pub fn with_check_sum(mut self, check_sum: bool) -> Self {
        self.check_sum = check_sum;
        self
    }

    pub fn with_application_identifier(mut self, property: impl Into<String>) -> Self {
        self.application_identifier = Some(property.into());
        self
    }

    pub fn with_scale_mode(mut self, scale_mode: ImageScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }
}

/// What the column renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColumnKind {
    /// Formatted text of the property value.
    #[default]
    Property,
    /// The property value is an image.
    Image { scale_mode: ImageScaleMode },
    /// The property value is encoded as a barcode.
    Barcode(BarcodeOptions),
}

/// One column of the detail band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique name within the report; empty until the column joins a report.
    #[serde(default)]
    pub name: String,

    /// Header text.
    pub title: String,

    pub property: ColumnProperty,

    /// Width in points.
    pub width: u32,

    /// When true the engine never stretches the column to fill the page.
    pub fixed_width: bool,

    /// Display pattern (e.g., "$ #.00", "dd/MM/yy").
    pub pattern: Option<String>,

    /// Detail style; None falls back to the report's default detail style.
    pub style: Option<Style>,

    /// Header style; None falls back to the report's default header style.
    pub header_style: Option<Style>,

    #[serde(default)]
    pub kind: ColumnKind,
}

impl Column {
    pub fn value_type(&self) -> ValueType {
        self.property.value_type
    }

    pub fn property_name(&self) -> &str {
        &self.property.property
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ColumnKind::Image { .. })
    }

    pub fn is_barcode(&self) -> bool {
        matches!(self.kind, ColumnKind::Barcode(_))
    }
}

/// A lightweight reference from groups and variables to a report column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Position in the report's column list (0-based).
    pub index: usize,

    /// Property of the referenced column, kept for readability of saved definitions.
    pub property: String,
}

impl ColumnRef {
    pub fn new(index: usize, column: &Column) -> Self {
        ColumnRef {
            index,
            property: column.property.property.clone(),
        }
    }
}

/// Name given to the column at `index` (0-based) when it joins a report.
pub fn column_name_for(index: usize) -> String {
    format!("{}{}", COLUMN_NAME_PREFIX, index)
}
