//! User input flowing through validation into the matcher.

use pretty_assertions::assert_eq;
use tailmatch::services::{contrasting_text_color, ColorMatcher, PaletteStore, PerceptualDistance};
use tailmatch::validation::{extract_hex_color, is_valid_hex, normalize_hex_input};

#[test]
fn test_bare_lowercase_input_matches_exactly() {
    let store = PaletteStore::tailwind();
    let matcher = ColorMatcher::new(&store, PerceptualDistance::new());

    let query = extract_hex_color("  3b82f6\n").unwrap();
    assert_eq!(query, "#3B82F6");
    let m = matcher.find_closest(&query, 50.0).unwrap();
    assert_eq!(m.entry.name, "blue-500");
    assert!(m.is_exact());
}

#[test]
fn test_normalized_input_is_valid() {
    for input in ["ef4444", "#ef4444", " #EF4444 ", "EF4444"] {
        let normalized = normalize_hex_input(input);
        assert!(is_valid_hex(&normalized), "{input:?} -> {normalized:?}");
    }
}

#[test]
fn test_rejected_inputs() {
    for input in ["", "red", "#fff", "fff", "#12345", "#1234567", "#GGGGGG", "0x123456"] {
        assert_eq!(extract_hex_color(input), None, "{input:?}");
    }
}

#[test]
fn test_contrast_for_palette_extremes() {
    let store = PaletteStore::tailwind();
    let slate_50 = store.get("slate-50").unwrap();
    let slate_950 = store.get("slate-950").unwrap();
    assert_eq!(contrasting_text_color(&slate_50.hex), "#000000");
    assert_eq!(contrasting_text_color(&slate_950.hex), "#FFFFFF");
}
