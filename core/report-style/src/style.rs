//! FILENAME: core/report-style/src/style.rs
//! PURPOSE: Defines the style data structures applied to report columns, headers and titles.
//! CONTEXT: Styles are plain values. A column either carries its own style or falls
//! back to the defaults stored in the report options; the rendering engine resolves
//! the final look.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of text inside a report cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical alignment of text inside a report cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Whether the background of an element is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Transparency {
    #[default]
    Transparent,
    Opaque,
}

/// How an image is fitted into its column cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ImageScaleMode {
    /// Keep the original size, clipping what does not fit.
    NoResize,
    /// Stretch to the cell, ignoring the aspect ratio.
    Fill,
    /// Scale to fit the cell while keeping the aspect ratio.
    #[default]
    FillProportionally,
    /// Grow the cell to the image size.
    RealSize,
}

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8, // Alpha channel (255 = opaque)
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::new(192, 192, 192);
    pub const GRAY: Color = Color::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Hex form used by the rendering engine ("#RRGGBB", alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse from hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::new(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::with_alpha(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Pen used to draw one edge of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BorderLine {
    #[default]
    None,
    Thin,
    OnePoint,
    TwoPoint,
    FourPoint,
    Dotted,
}

/// Border style for a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Border {
    pub line: BorderLine,
    pub color: Color,
}

impl Border {
    pub const NONE: Border = Border { line: BorderLine::None, color: Color::BLACK };
    pub const THIN: Border = Border { line: BorderLine::Thin, color: Color::BLACK };
    pub const DOTTED: Border = Border { line: BorderLine::Dotted, color: Color::BLACK };

    pub fn is_visible(&self) -> bool {
        self.line != BorderLine::None
    }
}

/// Complete border configuration for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Borders {
    pub top: Border,
    pub right: Border,
    pub bottom: Border,
    pub left: Border,
}

impl Borders {
    /// Same border on every edge.
    pub fn all(border: Border) -> Self {
        Borders {
            top: border,
            right: border,
            bottom: border,
            left: border,
        }
    }
}

/// Font configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: u8, // Font size in points
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl Font {
    pub const SMALL: u8 = 8;
    pub const MEDIUM: u8 = 10;
    pub const BIG: u8 = 14;
    pub const HUGE: u8 = 20;

    pub fn new(family: &str, size: u8, bold: bool, italic: bool) -> Self {
        Font {
            family: family.to_string(),
            size,
            bold,
            italic,
            underline: false,
            strikethrough: false,
        }
    }

    pub fn arial_small() -> Self {
        Font::new("Arial", Font::SMALL, false, false)
    }

    pub fn arial_medium() -> Self {
        Font::new("Arial", Font::MEDIUM, false, false)
    }

    pub fn arial_medium_bold() -> Self {
        Font::new("Arial", Font::MEDIUM, true, false)
    }

    pub fn arial_big_bold() -> Self {
        Font::new("Arial", Font::BIG, true, false)
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::arial_medium()
    }
}

/// Complete style definition for a report element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Style {
    /// Named styles are emitted once by the engine and referenced by name.
    pub name: Option<String>,
    pub font: Font,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub borders: Borders,
    pub text_color: Color,
    pub background_color: Option<Color>,
    pub transparency: Transparency,
    pub padding: u8,
    pub stretch_with_overflow: bool,
}

impl Style {
    /// Create a new default style.
    pub fn new() -> Self {
        Style::default()
    }

    /// Create an empty style registered under `name`.
    pub fn named(name: &str) -> Self {
        Style {
            name: Some(name.to_string()),
            ..Style::default()
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = align;
        self
    }

    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }

    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_border_bottom(mut self, border: Border) -> Self {
        self.borders.bottom = border;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Setting a background does not paint it; see [`Style::with_transparency`].
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_transparency(mut self, transparency: Transparency) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_stretch_with_overflow(mut self, stretch: bool) -> Self {
        self.stretch_with_overflow = stretch;
        self
    }

    /// Background color the engine will actually paint, if any.
    pub fn painted_background(&self) -> Option<Color> {
        match self.transparency {
            Transparency::Opaque => self.background_color,
            Transparency::Transparent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let red = Color::new(255, 0, 0);
        assert_eq!(red.to_hex(), "#FF0000");
        assert_eq!(Color::LIGHT_GRAY.to_hex(), "#C0C0C0");
    }

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#FF0000").unwrap();
        assert_eq!(color, Color::new(255, 0, 0));

        let color2 = Color::from_hex("00FF0080").unwrap();
        assert_eq!(color2.g, 255);
        assert_eq!(color2.a, 128);

        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
    }

    #[test]
    fn test_style_builders() {
        let style = Style::named("header")
            .with_font(Font::arial_medium_bold())
            .with_horizontal_align(HorizontalAlign::Center)
            .with_border_bottom(Border::THIN);

        assert_eq!(style.name.as_deref(), Some("header"));
        assert!(style.font.bold);
        assert_eq!(style.font.size, Font::MEDIUM);
        assert_eq!(style.horizontal_align, HorizontalAlign::Center);
        assert!(style.borders.bottom.is_visible());
        assert!(!style.borders.top.is_visible());
    }

    #[test]
    fn test_background_needs_opaque() {
        let style = Style::new().with_background(Color::LIGHT_GRAY);
        assert_eq!(style.painted_background(), None);

        let opaque = style.with_transparency(Transparency::Opaque);
        assert_eq!(opaque.painted_background(), Some(Color::LIGHT_GRAY));
    }

    #[test]
    fn test_style_serializes() {
        let style = Style::named("numberStyle").with_horizontal_align(HorizontalAlign::Right);
        let json = serde_json::to_string(&style).unwrap();
        let back: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}
