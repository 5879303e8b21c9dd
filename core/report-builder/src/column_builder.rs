//! FILENAME: core/report-builder/src/column_builder.rs
//! Builds a single [`Column`].

use report_definition::{BarcodeOptions, Column, ColumnKind, ColumnProperty, ValueType};
use report_style::{ImageScaleMode, Style};

use crate::error::{BuilderError, BuilderResult};

/// Width given to columns that never set one, in points.
pub const DEFAULT_COLUMN_WIDTH: u32 = 50;

#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    title: String,
    property: Option<ColumnProperty>,
    field_description: Option<String>,
    width: u32,
    fixed_width: bool,
    pattern: Option<String>,
    style: Option<Style>,
    header_style: Option<Style>,
    kind: ColumnKind,
}

impl Default for ColumnBuilder {
    fn default() -> Self {
        ColumnBuilder::new()
    }
}

impl ColumnBuilder {
    pub fn new() -> Self {
        ColumnBuilder {
            title: String::new(),
            property: None,
            field_description: None,
            width: DEFAULT_COLUMN_WIDTH,
            fixed_width: false,
            pattern: None,
            style: None,
            header_style: None,
            kind: ColumnKind::Property,
        }
    }

    pub fn property(mut self, property: impl Into<String>, value_type: ValueType) -> Self {
        self.property = Some(ColumnProperty::new(property, value_type));
        self
    }

    pub fn field_description(mut self, description: impl Into<String>) -> Self {
        self.field_description = Some(description.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn fixed_width(mut self, fixed_width: bool) -> Self {
        self.fixed_width = fixed_width;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    pub fn image(mut self, scale_mode: ImageScaleMode) -> Self {
        self.kind = ColumnKind::Image { scale_mode };
        self
    }

    pub fn barcode(mut self, options: BarcodeOptions) -> Self {
        self.kind = ColumnKind::Barcode(options);
        self
    }

    pub fn build(self) -> BuilderResult<Column> {
        let mut property = self.property.ok_or_else(|| BuilderError::MissingProperty {
            title: self.title.clone(),
        })?;
        if self.field_description.is_some() {
            property.field_description = self.field_description;
        }

        if self.width == 0 {
            return Err(BuilderError::InvalidWidth {
                property: property.property,
            });
        }

        if matches!(self.kind, ColumnKind::Image { .. }) && !property.value_type.is_image_source() {
            return Err(BuilderError::InvalidImageType(property.value_type));
        }

        Ok(Column {
            name: String::new(),
            title: self.title,
            property,
            width: self.width,
            fixed_width: self.fixed_width,
            pattern: self.pattern,
            style: self.style,
            header_style: self.header_style,
            kind: self.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_definition::BarcodeType;

    #[test]
    fn test_builds_property_column() {
        let column = ColumnBuilder::new()
            .property("amount", ValueType::Decimal)
            .field_description("order/amount")
            .title("Amount")
            .width(80)
            .fixed_width(true)
            .pattern("#.00")
            .build()
            .unwrap();

        assert_eq!(column.title, "Amount");
        assert_eq!(column.property_name(), "amount");
        assert_eq!(column.property.field_description.as_deref(), Some("order/amount"));
        assert_eq!(column.width, 80);
        assert!(column.fixed_width);
        assert_eq!(column.pattern.as_deref(), Some("#.00"));
        assert_eq!(column.kind, ColumnKind::Property);
        assert!(column.name.is_empty());
    }

    #[test]
    fn test_field_description_before_property() {
        let column = ColumnBuilder::new()
            .field_description("order/amount")
            .property("amount", ValueType::Decimal)
            .build()
            .unwrap();
        assert_eq!(column.property.field_description.as_deref(), Some("order/amount"));
    }

    #[test]
    fn test_default_width() {
        let column = ColumnBuilder::new().property("id", ValueType::Long).build().unwrap();
        assert_eq!(column.width, DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_missing_property() {
        let err = ColumnBuilder::new().title("Orphan").build().unwrap_err();
        assert!(matches!(err, BuilderError::MissingProperty { ref title } if title == "Orphan"));
    }

    #[test]
    fn test_zero_width() {
        let err = ColumnBuilder::new().property("id", ValueType::Long).width(0).build().unwrap_err();
        assert!(matches!(err, BuilderError::InvalidWidth { .. }));
    }

    #[test]
    fn test_image_requires_image_source() {
        let err = ColumnBuilder::new()
            .property("photo", ValueType::String)
            .image(ImageScaleMode::Fill)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuilderError::InvalidImageType(ValueType::String)));

        let ok = ColumnBuilder::new()
            .property("photo", ValueType::Image)
            .image(ImageScaleMode::Fill)
            .build()
            .unwrap();
        assert!(ok.is_image());
    }

    #[test]
    fn test_barcode_column() {
        let column = ColumnBuilder::new()
            .property("sku", ValueType::String)
            .barcode(BarcodeOptions::new(BarcodeType::Code128).with_show_text(true))
            .build()
            .unwrap();
        assert!(column.is_barcode());
    }
}
