//! Palette store behavior seen from outside the crate.

mod common;

use common::exact;
use pretty_assertions::assert_eq;
use tailmatch::models::PaletteEntry;
use tailmatch::services::PaletteStore;

#[test]
fn test_default_store_is_tailwind() {
    let store = PaletteStore::default();
    assert!(!store.is_loaded());
    assert_eq!(store.len(), 244);
    assert!(store.is_loaded());
}

#[test]
fn test_family_shades_in_order() {
    let store = PaletteStore::tailwind();
    let blues: Vec<&PaletteEntry> = store
        .palette()
        .iter()
        .filter(|e| e.name.starts_with("blue-"))
        .collect();

    let shades: Vec<&str> = blues
        .iter()
        .map(|e| e.name.trim_start_matches("blue-"))
        .collect();
    assert_eq!(
        shades,
        vec!["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
    );
    assert_eq!(blues[5].hex, exact::BLUE_500);
}

#[test]
fn test_entries_are_normalized() {
    let store = PaletteStore::tailwind();
    for entry in store.palette() {
        assert_eq!(entry.hex, entry.hex.to_uppercase());
        assert_eq!(entry.class_name, format!("bg-{}", entry.name));
        assert!(entry.is_hex());
    }
}

#[test]
fn test_names_are_unique() {
    let store = PaletteStore::tailwind();
    let mut names: Vec<&str> = store.palette().iter().map(|e| e.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), store.len());
}

#[test]
fn test_shared_hex_resolves_to_first() {
    let store = PaletteStore::tailwind();
    let sharing: Vec<&str> = store
        .palette()
        .iter()
        .filter(|e| e.hex == exact::ZINC_50)
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(sharing, vec!["zinc-50", "neutral-50"]);
    assert_eq!(store.find_exact_match(exact::ZINC_50).unwrap().name, "zinc-50");
}

#[test]
fn test_get_by_name() {
    let store = PaletteStore::tailwind();
    assert_eq!(store.get("white").unwrap().hex, exact::WHITE);
    assert_eq!(store.get("red-500").unwrap().hex, exact::RED_500);
    assert!(store.get("red-1000").is_none());
}

#[test]
fn test_palette_serializes() {
    let store = common::palette_with_sentinels();
    let json = serde_json::to_value(store.palette()).unwrap();
    assert_eq!(json[3]["name"], "black");
    assert_eq!(json[3]["hex"], "#000000");
    assert_eq!(json[5]["hex"], "#EF4444");
    assert_eq!(json[0]["hex"], "inherit");
}
