//! Linear RGB color type
//!
//! Linear RGB is proportional to physical light intensity. It is the
//! intermediate step between gamma-encoded sRGB and the CIE XYZ based
//! spaces, and the space relative luminance is defined in.

use super::srgb::Srgb;

/// Rec. 709 / sRGB luminance coefficients.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// A color in linear RGB color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance (WCAG), 0.0 for black and 1.0 for white.
    ///
    /// # Example
    ///
    /// ```
    /// use color_delta::{LinearRgb, Srgb};
    ///
    /// let white = LinearRgb::from(Srgb::from_u8(255, 255, 255));
    /// assert!((white.luminance() - 1.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn luminance(self) -> f64 {
        LUMA_R * self.r + LUMA_G * self.g + LUMA_B * self.b
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode sRGB (IEC 61966-2-1).
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

/// IEC 61966-2-1: sRGB to linear
#[inline]
fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}
