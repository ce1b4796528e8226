//! Perceptual distance between hex colors
//!
//! [`PerceptualDistance`] tries an ordered chain of strategies and returns
//! the first one that produces a distance:
//!
//! 1. [`DistanceStrategy::DeltaE2000`]: CIEDE2000 on CIE Lab. Fails when a
//!    color cannot be parsed.
//! 2. [`DistanceStrategy::WeightedLch`]: `sqrt((2·ΔL)² + ΔC² + ΔH²)` on LCh
//!    components. Unparseable colors decompose to `(0, 0, 0)`, so this tier
//!    only fails if the arithmetic goes non-finite.
//! 3. `f64::INFINITY`: the colors are incomparable. Never "identical".
//!
//! Every degradation is logged; no failure reaches the caller.

use color_delta::{Lab, Lch, ParseColorError, Srgb};
use thiserror::Error;

/// Lightness weight of the LCh fallback formula.
const LCH_LIGHTNESS_WEIGHT: f64 = 2.0;

/// Seam between the matcher and the distance computation.
pub trait ColorDistance {
    /// Non-negative distance between two hex colors; `INFINITY` if the
    /// colors cannot be compared.
    fn distance(&self, a: &str, b: &str) -> f64;
}

impl<T: ColorDistance + ?Sized> ColorDistance for &T {
    fn distance(&self, a: &str, b: &str) -> f64 {
        (**self).distance(a, b)
    }
}

/// Why a single strategy could not produce a distance.
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("cannot parse color {color:?}: {source}")]
    Parse {
        color: String,
        #[source]
        source: ParseColorError,
    },

    #[error("distance is not finite")]
    NonFinite,
}

/// One tier of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceStrategy {
    /// CIEDE2000 (kL = kC = kH = 1)
    DeltaE2000,
    /// Lightness-weighted Euclidean distance on LCh components
    WeightedLch,
}

impl DistanceStrategy {
    pub fn name(self) -> &'static str {
        match self {
            DistanceStrategy::DeltaE2000 => "ciede2000",
            DistanceStrategy::WeightedLch => "weighted-lch",
        }
    }

    pub fn try_distance(self, a: &str, b: &str) -> Result<f64, DistanceError> {
        let distance = match self {
            DistanceStrategy::DeltaE2000 => {
                let lab_a = Lab::from(parse_color(a)?);
                let lab_b = Lab::from(parse_color(b)?);
                lab_a.delta_e(lab_b)
            }
            DistanceStrategy::WeightedLch => {
                let [l1, c1, h1] = lch_components(a);
                let [l2, c2, h2] = lch_components(b);
                let dl = (l1 - l2) * LCH_LIGHTNESS_WEIGHT;
                let dc = c1 - c2;
                let dh = h1 - h2;
                (dl * dl + dc * dc + dh * dh).sqrt()
            }
        };

        if distance.is_finite() {
            Ok(distance)
        } else {
            Err(DistanceError::NonFinite)
        }
    }
}

/// The default chain: CIEDE2000, then weighted LCh.
pub const DEFAULT_CHAIN: [DistanceStrategy; 2] =
    [DistanceStrategy::DeltaE2000, DistanceStrategy::WeightedLch];

/// Distance engine with an explicit fallback chain.
#[derive(Debug, Clone)]
pub struct PerceptualDistance {
    chain: Vec<DistanceStrategy>,
}

impl PerceptualDistance {
    pub fn new() -> Self {
        Self::with_chain(DEFAULT_CHAIN.to_vec())
    }

    /// Engine with a custom chain, tried in order. An empty chain makes
    /// every pair incomparable.
    pub fn with_chain(chain: Vec<DistanceStrategy>) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &[DistanceStrategy] {
        &self.chain
    }
}

impl Default for PerceptualDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorDistance for PerceptualDistance {
    fn distance(&self, a: &str, b: &str) -> f64 {
        for strategy in &self.chain {
            match strategy.try_distance(a, b) {
                Ok(distance) => return distance,
                Err(e) => {
                    tracing::warn!(strategy = strategy.name(), %e, a, b, "Distance strategy failed");
                }
            }
        }

        tracing::warn!(a, b, "No distance strategy succeeded, treating colors as incomparable");
        f64::INFINITY
    }
}

/// Parse a hex color for the distance engine.
pub(crate) fn parse_color(hex: &str) -> Result<Srgb, DistanceError> {
    hex.parse::<Srgb>().map_err(|source| DistanceError::Parse {
        color: hex.to_string(),
        source,
    })
}

/// `[L, C, H]` of a color, every non-finite component replaced by 0.
/// Unparseable colors decompose to all zeros.
fn lch_components(hex: &str) -> [f64; 3] {
    match parse_color(hex) {
        Ok(srgb) => Lch::from(srgb).components(),
        Err(e) => {
            tracing::warn!(%e, "Failed to get LCH components, using zeros");
            [0.0; 3]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PerceptualDistance {
        PerceptualDistance::new()
    }

    #[test]
    fn test_identity() {
        for hex in ["#000000", "#FFFFFF", "#EF4444", "#3B82F6", "#FAFAFA"] {
            assert_eq!(engine().distance(hex, hex), 0.0, "{hex}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        let upper = engine().distance("#EF4444", "#3B82F6");
        let lower = engine().distance("#ef4444", "#3b82f6");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("#FF0000", "#EF4444"),
            ("#000000", "#FFFFFF"),
            ("#0EA5E9", "#6366F1"),
            ("#84CC16", "#FACC15"),
        ];
        for (a, b) in pairs {
            let ab = engine().distance(a, b);
            let ba = engine().distance(b, a);
            assert!((ab - ba).abs() < 1e-9, "{a}/{b}: {ab} vs {ba}");
        }
    }

    #[test]
    fn test_perceptual_ranking() {
        // A lighter red is closer to red than a blue of similar lightness
        let red_to_light_red = engine().distance("#FF0000", "#F87171");
        let red_to_blue = engine().distance("#FF0000", "#3B82F6");
        assert!(red_to_light_red < red_to_blue);
    }

    #[test]
    fn test_delta_e_fails_on_garbage() {
        let result = DistanceStrategy::DeltaE2000.try_distance("#ZZZZZZ", "#000000");
        assert!(matches!(result, Err(DistanceError::Parse { .. })));
    }

    #[test]
    fn test_unparseable_falls_back_to_weighted_lch() {
        // Garbage decomposes to (0, 0, 0); white is (100, 0, 0) -> 2 * 100
        let d = engine().distance("#ZZZZZZ", "#FFFFFF");
        assert!(d.is_finite());
        assert!(d >= 0.0);
        assert!((d - 200.0).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_weighted_lch_formula() {
        let d = DistanceStrategy::WeightedLch
            .try_distance("#000000", "#FFFFFF")
            .unwrap();
        assert!((d - 200.0).abs() < 0.01, "got {d}");

        let d = DistanceStrategy::WeightedLch
            .try_distance("#EF4444", "#EF4444")
            .unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_empty_chain_is_incomparable() {
        let engine = PerceptualDistance::with_chain(Vec::new());
        assert_eq!(engine.distance("#000000", "#000000"), f64::INFINITY);
    }

    #[test]
    fn test_chain_order() {
        assert_eq!(engine().chain(), &DEFAULT_CHAIN);
        let lch_only = PerceptualDistance::with_chain(vec![DistanceStrategy::WeightedLch]);
        let d = lch_only.distance("#000000", "#FFFFFF");
        assert!((d - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_reference_through_trait_object() {
        let engine = engine();
        let dynamic: &dyn ColorDistance = &engine;
        assert_eq!(dynamic.distance("#000000", "#000000"), 0.0);
        assert_eq!((&engine).distance("#000000", "#000000"), 0.0);
    }
}
