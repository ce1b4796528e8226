//! CIE L*a*b* color space (D65)
//!
//! CIELAB is the input space of the CIE Delta E family of color-difference
//! formulas. Conversion goes sRGB -> linear RGB -> XYZ -> Lab.
//!
//! # Constants
//!
//! The sRGB to XYZ matrix and the D65 reference white are the ones used by
//! most web color libraries (Bruce Lindbloom's sRGB matrix, white
//! X=0.950470, Y=1.0, Z=1.088830), so distances agree with what designers
//! see in browser-based tools.

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// D65 reference white.
const WHITE_X: f64 = 0.950_470;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.088_830;

// CIE f(t) breakpoints: t0 = 4/29, t1 = 6/29, t2 = 3 * t1^2, t3 = t1^3
const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// A color in CIE L*a*b* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis: roughly -128 to 127 for sRGB colors
    pub a: f64,
    /// Blue-yellow axis: roughly -128 to 127 for sRGB colors
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIEDE2000 color difference to `other`.
    ///
    /// Shorthand for [`crate::ciede2000`].
    ///
    /// ```
    /// use color_delta::{Lab, Srgb};
    ///
    /// let red = Lab::from(Srgb::from_u8(255, 0, 0));
    /// assert_eq!(red.delta_e(red), 0.0);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        crate::delta::ciede2000(self, other)
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        // Step 1: linear sRGB to XYZ, normalized by the reference white
        let x = (0.412_456_4 * rgb.r + 0.357_576_1 * rgb.g + 0.180_437_5 * rgb.b) / WHITE_X;
        let y = (0.212_672_9 * rgb.r + 0.715_152_2 * rgb.g + 0.072_175_0 * rgb.b) / WHITE_Y;
        let z = (0.019_333_9 * rgb.r + 0.119_192_0 * rgb.g + 0.950_304_1 * rgb.b) / WHITE_Z;

        // Step 2: CIE nonlinearity
        let fx = xyz_to_lab(x);
        let fy = xyz_to_lab(y);
        let fz = xyz_to_lab(z);

        let l = 116.0 * fy - 16.0;
        Lab {
            l: l.max(0.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Srgb> for Lab {
    fn from(srgb: Srgb) -> Self {
        Lab::from(LinearRgb::from(srgb))
    }
}

#[inline]
fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 {
        t.cbrt()
    } else {
        t / T2 + T0
    }
}
