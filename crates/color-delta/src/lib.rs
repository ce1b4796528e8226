//! color-delta: perceptual color difference for hex color codes
//!
//! This library converts hex colors into the CIE color spaces and measures
//! how different two colors look to a human observer.
//!
//! # Quick Start
//!
//! ```
//! use color_delta::{Lab, Srgb};
//!
//! let red: Srgb = "#FF0000".parse().unwrap();
//! let tailwind_red: Srgb = "#EF4444".parse().unwrap();
//!
//! let d = Lab::from(red).delta_e(Lab::from(tailwind_red));
//! assert!(d > 0.0 && d < 20.0);
//! ```
//!
//! # Color Spaces
//!
//! - [`Srgb`]: gamma-encoded input, parsed from `#RRGGBB` / `#RGB`
//! - [`LinearRgb`]: linear light, used for luminance and as the step to XYZ
//! - [`Lab`]: CIE L*a*b* (D65), the input of CIEDE2000
//! - [`Lch`]: polar Lab, for lightness/chroma/hue weighted comparisons
//! - [`Hsl`]: reporting only
//!
//! # Why Not RGB Distance
//!
//! Euclidean distance on sRGB bytes misranks colors that differ mainly in
//! hue versus mainly in lightness: a saturated red and a slightly darker
//! red can be further apart in RGB than red and orange. CIEDE2000 reweights
//! the Lab channel differences and adds a rotation term for blues.

pub mod color;
pub mod delta;
pub mod error;

pub use color::{Hsl, Lab, Lch, LinearRgb, Srgb};
pub use delta::ciede2000;
pub use error::ParseColorError;
