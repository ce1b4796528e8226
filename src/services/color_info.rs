//! Color information and contrast helpers
//!
//! Presentation-side helpers built on the same conversions as the distance
//! engine. All of them degrade to a safe default instead of failing.

use color_delta::{Hsl, Lab, Lch, LinearRgb};
use serde::Serialize;

use super::distance::parse_color;

/// Relative luminance above which a color counts as light.
const LIGHT_LUMINANCE_THRESHOLD: f64 = 0.5;

pub const BLACK_TEXT: &str = "#000000";
pub const WHITE_TEXT: &str = "#FFFFFF";

/// A color expressed in every space the tool knows about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: [u8; 3],
    /// Hue in degrees, saturation and lightness in 0..=1
    pub hsl: [f64; 3],
    pub lab: [f64; 3],
    /// Hue is 0 for achromatic colors
    pub lch: [f64; 3],
    pub luminance: f64,
}

/// Describe a color; `None` if it cannot be parsed.
pub fn color_info(hex: &str) -> Option<ColorInfo> {
    let srgb = match parse_color(hex) {
        Ok(srgb) => srgb,
        Err(e) => {
            tracing::warn!(%e, "Failed to get color info");
            return None;
        }
    };

    let hsl = Hsl::from(srgb);
    let lab = Lab::from(srgb);
    let lch = Lch::from(lab);

    Some(ColorInfo {
        hex: srgb.to_hex(),
        rgb: srgb.to_bytes(),
        hsl: [hsl.h, hsl.s, hsl.l],
        lab: [lab.l, lab.a, lab.b],
        lch: lch.components(),
        luminance: LinearRgb::from(srgb).luminance(),
    })
}

/// True if the color's relative luminance exceeds 0.5. Unparseable colors
/// count as dark.
pub fn is_light_color(hex: &str) -> bool {
    match parse_color(hex) {
        Ok(srgb) => LinearRgb::from(srgb).luminance() > LIGHT_LUMINANCE_THRESHOLD,
        Err(e) => {
            tracing::warn!(%e, "Failed to determine color brightness");
            false
        }
    }
}

/// Black text for light backgrounds, white text otherwise.
pub fn contrasting_text_color(background: &str) -> &'static str {
    if is_light_color(background) {
        BLACK_TEXT
    } else {
        WHITE_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_light_color() {
        assert!(is_light_color("#FFFFFF"));
        assert!(is_light_color("#FEF08A"));
        assert!(!is_light_color("#000000"));
        assert!(!is_light_color("#1E3A8A"));
        // Mid grey is perceptually "middle" but only ~0.22 luminance
        assert!(!is_light_color("#808080"));
    }

    #[test]
    fn test_is_light_color_degrades_to_dark() {
        assert!(!is_light_color("not a color"));
    }

    #[test]
    fn test_contrasting_text_color() {
        assert_eq!(contrasting_text_color("#FFFFFF"), BLACK_TEXT);
        assert_eq!(contrasting_text_color("#000000"), WHITE_TEXT);
        assert_eq!(contrasting_text_color("#ZZZZZZ"), WHITE_TEXT);
    }

    #[test]
    fn test_color_info() {
        let info = color_info("#ff0000").unwrap();
        assert_eq!(info.hex, "#FF0000");
        assert_eq!(info.rgb, [255, 0, 0]);
        assert_eq!(info.hsl, [0.0, 1.0, 0.5]);
        assert!((info.lab[0] - 53.24).abs() < 0.01);
        assert!((info.luminance - 0.2126).abs() < 1e-9);
    }

    #[test]
    fn test_color_info_grey_has_zero_hue() {
        let info = color_info("#808080").unwrap();
        assert_eq!(info.lch[2], 0.0);
        assert_eq!(info.hsl[0], 0.0);
    }

    #[test]
    fn test_color_info_invalid() {
        assert!(color_info("#GG0000").is_none());
    }
}
