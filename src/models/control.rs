use serde::{Deserialize, Serialize};

/// Which risk dimension a control is modeled as reducing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    Probability,
    Impact,
    Both,
}

/// One control associated to a risk. `effectiveness` is a percentage in
/// [0, 100]; a missing `effect_target` is treated as `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlEffect {
    pub effectiveness: f64,
    pub effect_target: Option<EffectTarget>,
}

impl ControlEffect {
    pub fn new(effectiveness: f64, effect_target: Option<EffectTarget>) -> Self {
        Self {
            effectiveness,
            effect_target,
        }
    }

    /// Whether this control reduces the probability dimension.
    pub fn targets_probability(&self) -> bool {
        matches!(
            self.effect_target.unwrap_or(EffectTarget::Both),
            EffectTarget::Probability | EffectTarget::Both
        )
    }

    /// Whether this control reduces the impact dimension.
    pub fn targets_impact(&self) -> bool {
        matches!(
            self.effect_target.unwrap_or(EffectTarget::Both),
            EffectTarget::Impact | EffectTarget::Both
        )
    }
}
