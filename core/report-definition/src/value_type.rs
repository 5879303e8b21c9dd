//! FILENAME: core/report-definition/src/value_type.rs
//! Declared value types of report fields.
//!
//! The rendering engine declares every field with a value class. This module
//! maps those class names, short aliases and Rust types onto one closed enum
//! so the builders can classify columns without string matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// The closed set of value types a report field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    String,
    Boolean,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Decimal,
    Date,
    Timestamp,
    Time,
    /// Raw bytes, e.g. an image stream.
    Binary,
    Image,
    Object,
}

/// (value type, engine class name, accepted aliases)
const NAME_TABLE: &[(ValueType, &str, &[&str])] = &[
    (ValueType::String, "java.lang.String", &["string", "str", "text"]),
    (ValueType::Boolean, "java.lang.Boolean", &["boolean", "bool"]),
    (ValueType::Short, "java.lang.Short", &["short", "i16"]),
    (ValueType::Integer, "java.lang.Integer", &["integer", "int", "i32"]),
    (ValueType::Long, "java.lang.Long", &["long", "i64"]),
    (ValueType::Float, "java.lang.Float", &["float", "f32"]),
    (ValueType::Double, "java.lang.Double", &["double", "f64"]),
    (ValueType::Decimal, "java.math.BigDecimal", &["decimal", "bigdecimal"]),
    (ValueType::Date, "java.util.Date", &["date"]),
    (ValueType::Timestamp, "java.sql.Timestamp", &["timestamp", "datetime"]),
    (ValueType::Time, "java.sql.Time", &["time"]),
    (ValueType::Binary, "java.io.InputStream", &["binary", "bytes", "inputstream"]),
    (ValueType::Image, "java.awt.Image", &["image"]),
    (ValueType::Object, "java.lang.Object", &["object", "any"]),
];

impl ValueType {
    /// Resolve a type name: an engine class name or a case-insensitive alias.
    pub fn from_name(name: &str) -> Result<Self, DefinitionError> {
        let trimmed = name.trim();
        let lowered = trimmed.to_ascii_lowercase();
        NAME_TABLE
            .iter()
            .find(|(_, class, aliases)| *class == trimmed || aliases.contains(&lowered.as_str()))
            .map(|(ty, _, _)| *ty)
            .ok_or_else(|| DefinitionError::UnknownValueType(name.to_string()))
    }

    /// The value type declared for a Rust type.
    pub fn of<T: ReportValue + ?Sized>() -> Self {
        T::VALUE_TYPE
    }

    /// Class name the rendering engine expects in field declarations.
    pub fn class_name(&self) -> &'static str {
        NAME_TABLE
            .iter()
            .find(|(ty, _, _)| ty == self)
            .map(|(_, class, _)| *class)
            .unwrap_or("java.lang.Object")
    }

    /// Decimal, float and double values.
    pub fn is_fractional(&self) -> bool {
        matches!(self, ValueType::Decimal | ValueType::Float | ValueType::Double)
    }

    pub fn is_integral(&self) -> bool {
        matches!(self, ValueType::Short | ValueType::Integer | ValueType::Long)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_fractional() || self.is_integral()
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, ValueType::Date | ValueType::Timestamp | ValueType::Time)
    }

    /// Types an image column can be fed from.
    pub fn is_image_source(&self) -> bool {
        matches!(self, ValueType::Binary | ValueType::Image)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for ValueType {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::from_name(s)
    }
}

/// Rust types that can back a report field.
pub trait ReportValue {
    const VALUE_TYPE: ValueType;
}

macro_rules! report_value {
    ($($ty:ty => $vt:ident),* $(,)?) => {
        $(impl ReportValue for $ty {
            const VALUE_TYPE: ValueType = ValueType::$vt;
        })*
    };
}

report_value! {
    String => String,
    str => String,
    bool => Boolean,
    i16 => Short,
    i32 => Integer,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    rust_decimal::Decimal => Decimal,
    chrono::NaiveDate => Date,
    chrono::NaiveDateTime => Timestamp,
    chrono::DateTime<chrono::Utc> => Timestamp,
    chrono::NaiveTime => Time,
    Vec<u8> => Binary,
    [u8] => Binary,
}

/// Anything that names a value type: a [`ValueType`] or a type name.
pub trait IntoValueType {
    fn into_value_type(self) -> Result<ValueType, DefinitionError>;
}

impl IntoValueType for ValueType {
    fn into_value_type(self) -> Result<ValueType, DefinitionError> {
        Ok(self)
    }
}

impl IntoValueType for &str {
    fn into_value_type(self) -> Result<ValueType, DefinitionError> {
        ValueType::from_name(self)
    }
}

impl IntoValueType for &String {
    fn into_value_type(self) -> Result<ValueType, DefinitionError> {
        ValueType::from_name(self)
    }
}

impl IntoValueType for String {
    fn into_value_type(self) -> Result<ValueType, DefinitionError> {
        ValueType::from_name(&self)
    }
}
