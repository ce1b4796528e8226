//! Ranked nearest-color search over the reference palette
//!
//! All operations are pure functions of the query, the palette and the
//! distance engine. Candidates are ordered by an explicit comparator,
//! distance ascending and then palette position ascending, so ties always
//! resolve to the entry that comes first in the palette.

use std::cmp::Ordering;

use super::distance::ColorDistance;
use super::palette_store::PaletteStore;
use crate::models::{MatchConfig, MatchResult, PaletteEntry};

/// Fixed number of family suggestions.
pub const FAMILY_SUGGESTION_COUNT: usize = 12;

/// A match together with the palette position of its entry.
type Ranked<'s> = (usize, MatchResult<'s>);

/// Finds the palette entries closest to a query color.
///
/// The store and engine are injected, so tests can supply small palettes
/// and instrumented engines.
pub struct ColorMatcher<'s, D> {
    store: &'s PaletteStore,
    engine: D,
}

impl<'s, D: ColorDistance> ColorMatcher<'s, D> {
    pub fn new(store: &'s PaletteStore, engine: D) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &'s PaletteStore {
        self.store
    }

    /// The single closest entry, if it lies within `threshold`.
    ///
    /// An exact hex match returns immediately with distance 0 and
    /// similarity 100, without computing any distance.
    pub fn find_closest(&self, query: &str, threshold: f64) -> Option<MatchResult<'s>> {
        let query = query.to_uppercase();

        if let Some(entry) = self.store.find_exact_match(&query) {
            return Some(MatchResult::exact(entry));
        }

        let best = self
            .candidates()
            .map(|(idx, entry)| (idx, self.score(&query, entry)))
            // Incomparable candidates never win
            .filter(|(_, m)| m.distance.is_finite())
            .min_by(by_distance);

        match best {
            Some((_, m)) if m.distance <= threshold => Some(m),
            Some((_, m)) => {
                tracing::debug!(
                    query = %query,
                    nearest = %m.entry.name,
                    distance = m.distance,
                    threshold,
                    "Nearest color outside threshold"
                );
                None
            }
            None => None,
        }
    }

    /// Up to `count` entries within `threshold`, closest first.
    ///
    /// An exact match is always included and any zero-distance result is
    /// forced to the front. Fewer than `count` results are returned when
    /// fewer qualify.
    pub fn find_multiple(&self, query: &str, count: usize, threshold: f64) -> Vec<MatchResult<'s>> {
        let query = query.to_uppercase();
        let exact = self.store.find_exact_match(&query);

        let mut matches: Vec<Ranked<'s>> = Vec::new();
        if let Some(entry) = exact {
            let idx = self.position(entry);
            matches.push((idx, MatchResult::exact(entry)));
        }

        for (idx, entry) in self.candidates() {
            if exact.is_some_and(|e| e.name == entry.name) {
                continue;
            }
            let m = self.score(&query, entry);
            if m.distance <= threshold {
                matches.push((idx, m));
            }
        }

        matches.sort_by(exact_first_then_distance);
        matches.into_iter().take(count).map(|(_, m)| m).collect()
    }

    /// The twelve closest entries regardless of any threshold.
    ///
    /// Unlike [`find_multiple`](Self::find_multiple), there is no exact-match
    /// short-circuit and results are ordered by distance alone.
    pub fn find_family_suggestions(&self, query: &str) -> Vec<MatchResult<'s>> {
        let mut matches: Vec<Ranked<'s>> = self
            .candidates()
            .map(|(idx, entry)| (idx, self.score(query, entry)))
            .collect();

        matches.sort_by(by_distance);
        matches
            .into_iter()
            .take(FAMILY_SUGGESTION_COUNT)
            .map(|(_, m)| m)
            .collect()
    }

    /// [`find_closest`](Self::find_closest) with the configured threshold.
    pub fn find_closest_with(&self, query: &str, config: &MatchConfig) -> Option<MatchResult<'s>> {
        self.find_closest(query, config.threshold)
    }

    /// [`find_multiple`](Self::find_multiple) with the configured count and
    /// threshold.
    pub fn find_multiple_with(&self, query: &str, config: &MatchConfig) -> Vec<MatchResult<'s>> {
        self.find_multiple(query, config.count, config.threshold)
    }

    /// Hex-valued entries with their palette positions; sentinels are skipped.
    fn candidates(&self) -> impl Iterator<Item = (usize, &'s PaletteEntry)> {
        let store = self.store;
        store
            .palette()
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_hex())
    }

    fn score(&self, query: &str, entry: &'s PaletteEntry) -> MatchResult<'s> {
        MatchResult::new(entry, self.engine.distance(query, &entry.hex))
    }

    fn position(&self, entry: &PaletteEntry) -> usize {
        self.store
            .palette()
            .iter()
            .position(|e| std::ptr::eq(e, entry))
            .unwrap_or(0)
    }
}

/// Distance ascending, then palette position ascending.
fn by_distance(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    a.1.distance
        .total_cmp(&b.1.distance)
        .then_with(|| a.0.cmp(&b.0))
}

/// Zero-distance results first, then [`by_distance`].
fn exact_first_then_distance(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    match (a.1.is_exact(), b.1.is_exact()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => by_distance(a, b),
    }
}
