//! Test fixtures and constants.

use tailmatch::models::PaletteEntry;
use tailmatch::services::PaletteStore;

/// Colors that appear verbatim in the Tailwind palette
pub mod exact {
    pub const BLACK: &str = "#000000";
    pub const WHITE: &str = "#FFFFFF";
    pub const RED_500: &str = "#EF4444";
    pub const BLUE_500: &str = "#3B82F6";
    /// Shared by zinc-50 and neutral-50
    pub const ZINC_50: &str = "#FAFAFA";
}

/// Colors that are not in the palette
pub mod off_palette {
    pub const PURE_RED: &str = "#FF0000";
    pub const PURE_GREEN: &str = "#00FF00";
    pub const PURE_BLUE: &str = "#0000FF";
    pub const ODD_TEAL: &str = "#1ABC9C";
    pub const ALL: [&str; 4] = [PURE_RED, PURE_GREEN, PURE_BLUE, ODD_TEAL];
}

/// A small palette that includes the non-color sentinels Tailwind uses.
pub fn palette_with_sentinels() -> PaletteStore {
    PaletteStore::from_entries(vec![
        PaletteEntry::new("inherit", "inherit"),
        PaletteEntry::new("current", "currentColor"),
        PaletteEntry::new("transparent", "transparent"),
        PaletteEntry::new("black", "#000000"),
        PaletteEntry::new("white", "#ffffff"),
        PaletteEntry::new("red-500", "#ef4444"),
    ])
}

pub fn empty_palette() -> PaletteStore {
    PaletteStore::from_entries(Vec::new())
}
