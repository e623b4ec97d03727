use crate::utils::math::clamp;
use serde::{Deserialize, Serialize};

/// How multiple control effectiveness values combine into one reduction
/// factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineMode {
    /// Arithmetic sum of the fractions, capped.
    Sum,
    /// Independent-event combination `1 - ∏(1 - eᵢ)`, capped.
    #[default]
    Compound,
}

/// Policy cap on the combined reduction: no set of controls is treated as
/// removing more than 90% of the risk, so residual risk never reaches zero
/// through this path.
pub const DEFAULT_MAX_EFFECTIVENESS: f64 = 0.9;

/// Combine control effectiveness percentages (0–100 each) into a single
/// reduction fraction in `[0, max_effectiveness]`. Empty input combines to 0.
/// Out-of-range percentages are clamped to [0, 100] before normalizing,
/// matching the clamp policy of the impact-factor path.
pub fn combine_controls(
    effectiveness_pcts: &[f64],
    mode: CombineMode,
    max_effectiveness: f64,
) -> f64 {
    if effectiveness_pcts.is_empty() {
        return 0.0;
    }

    let fractions = effectiveness_pcts
        .iter()
        .map(|&pct| clamp(pct, 0.0, 100.0) / 100.0);

    let combined = match mode {
        CombineMode::Sum => fractions.sum(),
        CombineMode::Compound => 1.0 - fractions.map(|f| 1.0 - f).product::<f64>(),
    };

    clamp(combined, 0.0, max_effectiveness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_controls_combine_to_zero() {
        assert_eq!(
            combine_controls(&[], CombineMode::Compound, DEFAULT_MAX_EFFECTIVENESS),
            0.0
        );
    }

    #[test]
    fn compound_combination_of_independent_controls() {
        // 1 - (0.5 * 0.5) = 0.75, below the cap so returned as-is.
        let combined =
            combine_controls(&[50.0, 50.0], CombineMode::Compound, DEFAULT_MAX_EFFECTIVENESS);
        assert!((combined - 0.75).abs() < 1e-12);
    }

    #[test]
    fn fully_effective_control_is_capped() {
        let combined =
            combine_controls(&[100.0], CombineMode::Compound, DEFAULT_MAX_EFFECTIVENESS);
        assert_eq!(combined, DEFAULT_MAX_EFFECTIVENESS);
    }

    #[test]
    fn sum_mode_caps_at_max_effectiveness() {
        let combined = combine_controls(&[60.0, 60.0], CombineMode::Sum, DEFAULT_MAX_EFFECTIVENESS);
        assert_eq!(combined, DEFAULT_MAX_EFFECTIVENESS);

        let combined = combine_controls(&[30.0, 40.0], CombineMode::Sum, DEFAULT_MAX_EFFECTIVENESS);
        assert!((combined - 0.7).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        let combined =
            combine_controls(&[150.0], CombineMode::Compound, DEFAULT_MAX_EFFECTIVENESS);
        assert_eq!(combined, DEFAULT_MAX_EFFECTIVENESS);

        let combined =
            combine_controls(&[-20.0, 50.0], CombineMode::Compound, DEFAULT_MAX_EFFECTIVENESS);
        assert!((combined - 0.5).abs() < 1e-12);
    }
}
