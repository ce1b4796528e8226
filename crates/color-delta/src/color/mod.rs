//! Color types and conversion utilities
//!
//! Every conversion starts from a hex code parsed into [`Srgb`]:
//!
//! ```text
//! Srgb --gamma--> LinearRgb --XYZ/D65--> Lab --polar--> Lch
//!   \
//!    +--> Hsl (reporting only)
//! ```
//!
//! # Example
//!
//! ```
//! use color_delta::{Lab, Lch, Srgb};
//!
//! let srgb: Srgb = "#EF4444".parse().unwrap();
//! let lab = Lab::from(srgb);
//! let lch = Lch::from(lab);
//! assert!(lch.c > 50.0);
//! ```

mod hsl;
mod lab;
mod lch;
mod linear_rgb;
mod srgb;

pub use hsl::Hsl;
pub use lab::Lab;
pub use lch::Lch;
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
