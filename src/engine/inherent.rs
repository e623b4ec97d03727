use crate::config::DecimalConfig;
use crate::engine::{SCALE_MIN, SCALE_MAX};
use crate::models::{ImpactFactors, ImpactWeights};
use crate::utils::math::{clamp, round_score};

/// Inherent risk: probability × impact before any mitigation, rounded per the
/// process rounding policy.
///
/// Range policy: inputs are taken as already on the 1–5 scale and are NOT
/// re-clamped here. Clamping belongs to the impact-factor path
/// ([`impact_from_factors`]); callers feeding raw user input go through that
/// path first. A regression test pins this asymmetry.
pub fn inherent_risk(probability: f64, impact: f64, decimals: &DecimalConfig) -> f64 {
    round_score(probability * impact, decimals)
}

/// Combined impact from the seven per-dimension scores: each dimension is
/// clamped to [1, 5] independently, and the result is the maximum of the
/// seven (worst-dimension-wins).
///
/// `weights` is accepted for forward compatibility with a weighted
/// aggregation policy but is not applied today; passing different weights
/// never changes the result.
pub fn impact_from_factors(factors: &ImpactFactors, weights: Option<&ImpactWeights>) -> f64 {
    let _ = weights;
    factors
        .as_array()
        .iter()
        .map(|&score| clamp(score, SCALE_MIN, SCALE_MAX))
        .fold(SCALE_MIN, f64::max)
}
