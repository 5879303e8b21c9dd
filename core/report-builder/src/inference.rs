//! FILENAME: core/report-builder/src/inference.rs
//! Default column styles derived from the declared value type.

use report_definition::{Column, ValueType};
use report_style::{HorizontalAlign, Style};

pub const CURRENCY_PATTERN: &str = "$ #.00";
pub const DATE_PATTERN: &str = "dd/MM/yy";
pub const TIMESTAMP_PATTERN: &str = "dd/MM/yy hh:mm:ss";

/// Which of the builder's shared styles a column should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    Currency,
    Number,
}

/// Result of classifying a value type. Both parts are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleGuess {
    pub role: Option<StyleRole>,
    /// Applied only when the column has no pattern yet.
    pub pattern: Option<&'static str>,
}

/// Classify a value type. Pure; the closed set of types keeps this a table.
pub fn guess_style(value_type: ValueType) -> StyleGuess {
    match value_type {
        ValueType::Decimal | ValueType::Float | ValueType::Double => StyleGuess {
            role: Some(StyleRole::Currency),
            pattern: Some(CURRENCY_PATTERN),
        },
        ValueType::Integer | ValueType::Long => StyleGuess {
            role: Some(StyleRole::Number),
            pattern: None,
        },
        ValueType::Date | ValueType::Time => StyleGuess {
            role: None,
            pattern: Some(DATE_PATTERN),
        },
        ValueType::Timestamp => StyleGuess {
            role: None,
            pattern: Some(TIMESTAMP_PATTERN),
        },
        _ => StyleGuess::default(),
    }
}

/// The styles a guess resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleInference {
    pub currency_style: Style,
    pub number_style: Style,
}

impl Default for StyleInference {
    fn default() -> Self {
        StyleInference {
            currency_style: Style::named("currencyStyle").with_horizontal_align(HorizontalAlign::Right),
            number_style: Style::named("numberStyle").with_horizontal_align(HorizontalAlign::Right),
        }
    }
}

impl StyleInference {
    pub fn style_for(&self, role: StyleRole) -> &Style {
        match role {
            StyleRole::Currency => &self.currency_style,
            StyleRole::Number => &self.number_style,
        }
    }

    /// Apply the guess for the column's value type. Returns true if anything changed.
    pub fn apply(&self, column: &mut Column) -> bool {
        let guess = guess_style(column.value_type());
        let mut changed = false;

        if let Some(pattern) = guess.pattern {
            if column.pattern.is_none() {
                column.pattern = Some(pattern.to_string());
                changed = true;
            }
        }
        if let Some(role) = guess.role {
            column.style = Some(self.style_for(role).clone());
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_definition::{ColumnKind, ColumnProperty};

    fn column(value_type: ValueType, pattern: Option<&str>) -> Column {
        Column {
            name: String::new(),
            title: "t".to_string(),
            property: ColumnProperty::new("p", value_type),
            width: 50,
            fixed_width: false,
            pattern: pattern.map(str::to_string),
            style: None,
            header_style: None,
            kind: ColumnKind::Property,
        }
    }

    #[test]
    fn test_fractional_types_get_currency() {
        let inference = StyleInference::default();
        for ty in [ValueType::Decimal, ValueType::Float, ValueType::Double] {
            let mut col = column(ty, None);
            assert!(inference.apply(&mut col));
            assert_eq!(col.pattern.as_deref(), Some(CURRENCY_PATTERN));
            let style = col.style.unwrap();
            assert_eq!(style.name.as_deref(), Some("currencyStyle"));
            assert_eq!(style.horizontal_align, HorizontalAlign::Right);
        }
    }

    #[test]
    fn test_existing_pattern_is_kept() {
        let inference = StyleInference::default();
        for ty in [ValueType::Decimal, ValueType::Float, ValueType::Double, ValueType::Date, ValueType::Timestamp] {
            let mut col = column(ty, Some("#,##0.000"));
            inference.apply(&mut col);
            assert_eq!(col.pattern.as_deref(), Some("#,##0.000"));
        }
    }

    #[test]
    fn test_integral_types_get_number_style() {
        let inference = StyleInference::default();
        for ty in [ValueType::Integer, ValueType::Long] {
            let mut col = column(ty, None);
            inference.apply(&mut col);
            assert_eq!(col.pattern, None);
            let style = col.style.unwrap();
            assert_eq!(style.name.as_deref(), Some("numberStyle"));
            assert_eq!(style.horizontal_align, HorizontalAlign::Right);
        }
    }

    #[test]
    fn test_temporal_patterns() {
        assert_eq!(guess_style(ValueType::Date).pattern, Some(DATE_PATTERN));
        assert_eq!(guess_style(ValueType::Timestamp).pattern, Some(TIMESTAMP_PATTERN));
        assert_eq!(guess_style(ValueType::Date).role, None);
    }

    #[test]
    fn test_time_takes_date_pattern() {
        let inference = StyleInference::default();
        let mut col = column(ValueType::Time, None);
        assert!(inference.apply(&mut col));
        assert_eq!(col.pattern.as_deref(), Some(DATE_PATTERN));
        assert_eq!(col.style, None);
    }

    #[test]
    fn test_other_types_untouched() {
        let inference = StyleInference::default();
        for ty in [ValueType::String, ValueType::Boolean, ValueType::Short, ValueType::Binary, ValueType::Object] {
            let mut col = column(ty, None);
            assert!(!inference.apply(&mut col));
            assert_eq!(col.style, None);
            assert_eq!(col.pattern, None);
        }
    }
}
