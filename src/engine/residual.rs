use crate::config::DecimalConfig;
use crate::engine::controls::{combine_controls, CombineMode, DEFAULT_MAX_EFFECTIVENESS};
use crate::engine::SCALE_MAX;
use crate::models::ControlEffect;
use crate::utils::math::{clamp, round_half_up, round_score};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Residual dimensions on the effect-target path are clamped to this floor;
/// the final score as well. Mitigation never drives a risk to exactly zero.
const RESIDUAL_FLOOR: f64 = 0.1;

/// The two residual-risk calculation policies in use. They are not
/// equivalent and both have call sites; the caller chooses explicitly per
/// calculation rather than the engine guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidualStrategy {
    /// Combine all controls into one reduction factor (compound mode, 0.9
    /// cap) and apply it to the inherent score. Effect targets are ignored;
    /// rounding follows the process decimal policy.
    CompoundCombination,
    /// Reduce probability and impact separately, applying each control
    /// multiplicatively to the dimension(s) it targets. Dimensions and score
    /// are clamped to a 0.1 floor and rounded to 1 decimal place (fixed
    /// precision, independent of the decimal policy).
    EffectTargetSplit,
}

/// Residual probability, impact, and score after applying controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualRisk {
    pub probability: f64,
    pub impact: f64,
    pub score: f64,
}

/// Compute residual risk from inherent probability/impact and the risk's
/// controls, under the chosen strategy.
pub fn residual_risk(
    probability: f64,
    impact: f64,
    controls: &[ControlEffect],
    strategy: ResidualStrategy,
    decimals: &DecimalConfig,
) -> ResidualRisk {
    debug!(
        probability,
        impact,
        controls = controls.len(),
        ?strategy,
        "computing residual risk"
    );
    match strategy {
        ResidualStrategy::CompoundCombination => {
            residual_by_compound(probability, impact, controls, decimals)
        }
        ResidualStrategy::EffectTargetSplit => {
            residual_by_effect_target(probability, impact, controls)
        }
    }
}

fn residual_by_compound(
    probability: f64,
    impact: f64,
    controls: &[ControlEffect],
    decimals: &DecimalConfig,
) -> ResidualRisk {
    let effectiveness_pcts: Vec<f64> = controls.iter().map(|c| c.effectiveness).collect();
    let combined = combine_controls(
        &effectiveness_pcts,
        CombineMode::Compound,
        DEFAULT_MAX_EFFECTIVENESS,
    );
    let score = round_score(probability * impact * (1.0 - combined), decimals);
    ResidualRisk {
        probability,
        impact,
        score,
    }
}

fn residual_by_effect_target(
    probability: f64,
    impact: f64,
    controls: &[ControlEffect],
) -> ResidualRisk {
    let residual_probability =
        reduce_dimension(probability, controls, ControlEffect::targets_probability);
    let residual_impact = reduce_dimension(impact, controls, ControlEffect::targets_impact);

    let score = round_half_up(
        (residual_probability * residual_impact).max(RESIDUAL_FLOOR),
        1,
    );

    ResidualRisk {
        probability: residual_probability,
        impact: residual_impact,
        score,
    }
}

fn reduce_dimension(
    value: f64,
    controls: &[ControlEffect],
    targets: impl Fn(&ControlEffect) -> bool,
) -> f64 {
    let reduced = controls
        .iter()
        .filter(|control| targets(control))
        .fold(value, |acc, control| {
            acc * (1.0 - control.effectiveness / 100.0)
        });
    round_half_up(clamp(reduced, RESIDUAL_FLOOR, SCALE_MAX), 1)
}
