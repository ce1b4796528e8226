//! Hex color input validation and normalization
//!
//! User input is accepted as `#RRGGBB` or bare `RRGGBB`, in any case and
//! with surrounding whitespace. Everything downstream (the matcher and the
//! distance engine) expects the normalized `#RRGGBB` form produced by
//! [`extract_hex_color`].

use regex::Regex;
use std::sync::OnceLock;

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"))
}

fn bare_hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("valid bare hex regex"))
}

/// True iff `s` is exactly `#` followed by six hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    hex_color_re().is_match(s)
}

/// Trim and canonicalize user input.
///
/// - six hex digits: prefix `#` and upper-case
/// - seven characters starting with `#`: upper-case
/// - anything else: returned trimmed but otherwise unchanged (and possibly
///   still invalid)
pub fn normalize_hex_input(input: &str) -> String {
    let cleaned = input.trim();
    if bare_hex_re().is_match(cleaned) {
        return format!("#{}", cleaned.to_uppercase());
    }
    if cleaned.len() == 7 && cleaned.starts_with('#') {
        return cleaned.to_uppercase();
    }
    cleaned.to_string()
}

/// Normalize then validate; `None` if the input is not a hex color.
pub fn extract_hex_color(input: &str) -> Option<String> {
    let normalized = normalize_hex_input(input);
    is_valid_hex(&normalized).then_some(normalized)
}
