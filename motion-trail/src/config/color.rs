//! Packed RGB line color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color '{0}': expected 0xRRGGBB, #RRGGBB, or a decimal value up to 16777215")]
pub struct ParseColorError(String);

/// Uniform line color, packed as `0xRRGGBB`.
///
/// Deserializing a number keeps only its low 24 bits, like [`Color::from_packed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    /// Opaque white, the default trail color.
    pub const WHITE: Color = Color(0xFF_FF_FF);

    /// Create a color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are discarded.
    pub const fn from_packed(rgb: u32) -> Self {
        Self(rgb & 0xFF_FF_FF)
    }

    /// Create a color from individual channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Color {
    fn from(rgb: u32) -> Self {
        Color::from_packed(rgb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.packed()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .or_else(|| trimmed.strip_prefix('#'));

        let value = match hex {
            Some(digits) if !digits.is_empty() && digits.len() <= 6 => {
                u32::from_str_radix(digits, 16).ok()
            }
            Some(_) => None,
            None => trimmed.parse::<u32>().ok(),
        };

        match value {
            Some(v) if v <= 0xFF_FF_FF => Ok(Color(v)),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::default().packed(), 0xFFFFFF);
    }

    #[test]
    fn test_channels() {
        let c = Color::from_packed(0x12_34_56);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
        assert_eq!(Color::from_rgb(0x12, 0x34, 0x56), c);
    }

    #[test]
    fn test_from_packed_masks_high_bits() {
        assert_eq!(Color::from_packed(0xAB_00_FF_00).packed(), 0x00_FF_00);
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("0xff8800".parse::<Color>(), Ok(Color::from_packed(0xFF8800)));
        assert_eq!("#00FF00".parse::<Color>(), Ok(Color::from_packed(0x00FF00)));
        assert_eq!(" 255 ".parse::<Color>(), Ok(Color::from_packed(0x0000FF)));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!("0x1000000".parse::<Color>().is_err());
        assert!("16777216".parse::<Color>().is_err());
        assert!("#".parse::<Color>().is_err());
        assert!("white".parse::<Color>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::from_packed(0xFF8800).to_string(), "0xFF8800");
        assert_eq!(Color::from_packed(0x10).to_string(), "0x000010");
    }
}
