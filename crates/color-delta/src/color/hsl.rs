//! HSL (hue, saturation, lightness) in the sRGB encoding.
//!
//! Only used for reporting; HSL is not perceptually uniform and never
//! takes part in distance calculations.

use super::srgb::Srgb;

/// Cylindrical sRGB representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0..360.0 (0.0 for greys)
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Lightness, 0.0..=1.0
    pub l: f64,
}

impl From<Srgb> for Hsl {
    fn from(rgb: Srgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if max == rgb.r {
            (rgb.g - rgb.b) / delta
        } else if max == rgb.g {
            2.0 + (rgb.b - rgb.r) / delta
        } else {
            4.0 + (rgb.r - rgb.g) / delta
        };

        Self {
            h: (h * 60.0).rem_euclid(360.0),
            s,
            l,
        }
    }
}
