//! FILENAME: core/report-style/src/lib.rs
//! PURPOSE: Style types shared by the report definition and its builders.

pub mod style;

pub use style::{
    Border, BorderLine, Borders, Color, Font, HorizontalAlign, ImageScaleMode, Style,
    Transparency, VerticalAlign,
};
