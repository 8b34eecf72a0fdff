//! Type definitions for grid rendering

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Point in canvas pixel space (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Size with width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// 8-bit RGB color
///
/// Serialized as a `"#rrggbb"` string; deserialized from either that form
/// or a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("Invalid hex color: {}", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| format!("Invalid hex color: {}", hex))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Guide line gray
    pub const fn light_gray() -> Self {
        Self::rgb(200, 200, 200)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawColor {
            Hex(String),
            Channels([u8; 3]),
        }

        match RawColor::deserialize(deserializer)? {
            RawColor::Hex(s) => Color::from_hex(&s).map_err(serde::de::Error::custom),
            RawColor::Channels([r, g, b]) => Ok(Color::rgb(r, g, b)),
        }
    }
}

/// Role of a grid line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Bottom edge of a section in a measure band
    Main,
    /// Quarter tick guide
    Sub,
}

/// One straight line to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineInstruction {
    pub kind: LineKind,
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub stroke_width: u32,
}

impl LineInstruction {
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#c8c8c8"), Ok(Color::light_gray()));
        assert_eq!(Color::from_hex("000000"), Ok(Color::black()));
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn test_color_json_forms() {
        let from_str: Color = serde_json::from_str("\"#ffffff\"").unwrap();
        let from_arr: Color = serde_json::from_str("[200, 200, 200]").unwrap();
        assert_eq!(from_str, Color::white());
        assert_eq!(from_arr, Color::light_gray());
        assert_eq!(serde_json::to_string(&Color::light_gray()).unwrap(), "\"#c8c8c8\"");
        assert!(serde_json::from_str::<Color>("[256, 0, 0]").is_err());
    }

    #[test]
    fn test_line_orientation() {
        let line = LineInstruction {
            kind: LineKind::Sub,
            start: Point::new(44, 0),
            end: Point::new(44, 80),
            color: Color::light_gray(),
            stroke_width: 1,
        };
        assert!(line.is_vertical());
        assert!(!line.is_horizontal());
    }
}
