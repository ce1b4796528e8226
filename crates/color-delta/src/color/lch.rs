//! CIE LCh(ab): polar form of Lab.
//!
//! - **L** (Lightness): same as Lab L
//! - **C** (Chroma): colorfulness, sqrt(a^2 + b^2)
//! - **h** (Hue): hue angle in degrees, 0.0..360.0
//!
//! Hue is undefined for achromatic colors and is reported as `NaN`
//! for them. Callers doing arithmetic on components should go through
//! [`Lch::components`], which maps every non-finite value to zero.

use super::lab::Lab;
use super::srgb::Srgb;

/// Polar Lab (Lightness, Chroma, Hue).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = grey)
    pub c: f64,
    /// Hue: angle in degrees, `NaN` when chroma rounds to zero
    pub h: f64,
}

impl Lch {
    /// `[L, C, h]` with any non-finite component replaced by 0.0.
    ///
    /// ```
    /// use color_delta::{Lch, Srgb};
    ///
    /// let grey = Lch::from(Srgb::from_u8(128, 128, 128));
    /// assert!(grey.h.is_nan());
    /// assert_eq!(grey.components()[2], 0.0);
    /// ```
    pub fn components(self) -> [f64; 3] {
        [self.l, self.c, self.h].map(|v| if v.is_finite() { v } else { 0.0 })
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        let c = lab.chroma();
        let h = if (c * 10_000.0).round() == 0.0 {
            f64::NAN
        } else {
            lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0)
        };
        Self { l: lab.l, c, h }
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        let [l, c, h] = lch.components();
        let h = h.to_radians();
        Lab::new(l, c * h.cos(), c * h.sin())
    }
}

impl From<Srgb> for Lch {
    fn from(srgb: Srgb) -> Self {
        Lch::from(Lab::from(srgb))
    }
}
