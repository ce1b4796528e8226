//! sRGB color type
//!
//! sRGB is the encoding every hex color code uses. It applies a gamma
//! curve to linear light values, so it is the input format for all the
//! perceptual conversions in this crate but never the space distances are
//! measured in.

use std::fmt;
use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use crate::error::ParseColorError;

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use color_delta::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Upper-case `#RRGGBB` representation.
    ///
    /// ```
    /// use color_delta::Srgb;
    /// assert_eq!(Srgb::from_u8(239, 68, 68).to_hex(), "#EF4444");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode linear light (IEC 61966-2-1).
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_delta::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "#f00".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Byte slicing below needs ASCII; anything else is not hex anyway.
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength(s.chars().count()));
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

/// IEC 61966-2-1: linear to sRGB
#[inline]
fn linear_to_srgb(linear: f64) -> f64 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_round_trip_accuracy() {
        for i in 0..=255u8 {
            let original = Srgb::from_u8(i, i, i);
            let back = Srgb::from(LinearRgb::from(original));
            assert_eq!(
                back.to_bytes(),
                [i, i, i],
                "Round-trip through linear light changed value {i}"
            );
        }
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Srgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Srgb::new(1.0, 1.0, 1.0));

        let black: Srgb = "#000000".parse().unwrap();
        assert_eq!(black, Srgb::new(0.0, 0.0, 0.0));

        let no_hash: Srgb = "EF4444".parse().unwrap();
        assert_eq!(no_hash.to_bytes(), [0xEF, 0x44, 0x44]);
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Srgb = "#ABC".parse().unwrap();
        assert_eq!(color, Srgb::from_u8(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        let result = "#GGGGGG".parse::<Srgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidHex(_))));

        let result = "#FFFF".parse::<Srgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength(4))));

        let result = "".parse::<Srgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength(0))));

        let result = "transparent".parse::<Srgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength(11))));

        // Multi-byte characters must not panic the slicing
        let result = "#ÄÄÄ".parse::<Srgb>();
        assert!(result.is_err());
    }

    #[test]
    fn test_hex_parsing_case_insensitive() {
        let upper: Srgb = "#ABCDEF".parse().unwrap();
        let lower: Srgb = "#abcdef".parse().unwrap();
        let mixed: Srgb = "  #AbCdEf ".parse().unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_to_hex_is_upper_case() {
        let color: Srgb = "#0ea5e9".parse().unwrap();
        assert_eq!(color.to_hex(), "#0EA5E9");
        assert_eq!(color.to_string(), "#0EA5E9");
    }
}
