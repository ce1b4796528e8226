use serde::Serialize;

use super::PaletteEntry;

/// Outcome of comparing a query color with one palette entry.
///
/// `entry` borrows from the palette; results never copy or mutate entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub entry: &'a PaletteEntry,
    /// Perceptual distance, 0.0 for an exact hex match
    pub distance: f64,
    /// 0..=100, 100 only for an exact match
    pub similarity: f64,
}

impl<'a> MatchResult<'a> {
    pub fn new(entry: &'a PaletteEntry, distance: f64) -> Self {
        Self {
            entry,
            distance,
            similarity: similarity(distance),
        }
    }

    /// Result for a byte-identical hex match.
    pub fn exact(entry: &'a PaletteEntry) -> Self {
        Self {
            entry,
            distance: 0.0,
            similarity: 100.0,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.distance == 0.0
    }
}

/// Map a distance onto a 0..=100 score: `clamp(100 - distance, 0, 100)`.
///
/// One Delta E unit costs one point; infinite distances score 0.
pub fn similarity(distance: f64) -> f64 {
    (100.0 - distance).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity(0.0), 100.0);
        assert_eq!(similarity(12.5), 87.5);
        assert_eq!(similarity(100.0), 0.0);
        assert_eq!(similarity(250.0), 0.0);
        assert_eq!(similarity(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_similarity_non_increasing() {
        let mut prev = similarity(0.0);
        for step in 1..=2000 {
            let s = similarity(f64::from(step) * 0.1);
            assert!(s <= prev, "similarity increased at distance {}", step);
            assert!((0.0..=100.0).contains(&s));
            prev = s;
        }
    }

    #[test]
    fn test_exact_and_new() {
        let entry = PaletteEntry::new("black", "#000000");
        let exact = MatchResult::exact(&entry);
        assert!(exact.is_exact());
        assert_eq!(exact.similarity, 100.0);

        let near = MatchResult::new(&entry, 3.0);
        assert!(!near.is_exact());
        assert_eq!(near.similarity, 97.0);
        assert!(std::ptr::eq(near.entry, &entry));
    }

    #[test]
    fn test_serializes_with_entry() {
        let entry = PaletteEntry::new("red-500", "#EF4444");
        let json = serde_json::to_value(MatchResult::new(&entry, 2.0)).unwrap();
        assert_eq!(json["entry"]["name"], "red-500");
        assert_eq!(json["entry"]["class_name"], "bg-red-500");
        assert_eq!(json["distance"], 2.0);
        assert_eq!(json["similarity"], 98.0);
    }
}
