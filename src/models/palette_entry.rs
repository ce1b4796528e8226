use serde::{Deserialize, Serialize};
use std::fmt;

/// A named reference color.
///
/// `hex` is upper-cased `#RRGGBB` for real colors. Values that do not start
/// with `#` are non-color sentinels ("transparent", "current", "inherit")
/// and are never compared by distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
    /// Presentation token (`bg-<name>`), never used for matching
    pub class_name: String,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, value: &str) -> Self {
        let name = name.into();
        let hex = if value.starts_with('#') {
            value.to_uppercase()
        } else {
            value.to_string()
        };
        let class_name = format!("bg-{name}");
        Self {
            name,
            hex,
            class_name,
        }
    }

    /// True for entries that carry a real hex color.
    pub fn is_hex(&self) -> bool {
        self.hex.starts_with('#')
    }
}

impl fmt::Display for PaletteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.hex)
    }
}
