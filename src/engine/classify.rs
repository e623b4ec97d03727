use crate::config::RiskRangeConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed bounds of the bounded legend form: the 1–5 × 1–5 scoring grid.
pub const LEGEND_MIN: f64 = 1.0;
pub const LEGEND_MAX: f64 = 25.0;

/// Severity band a score falls into, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Display label, fixed set shared with the surrounding application.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Bajo",
            RiskLevel::Medium => "Medio",
            RiskLevel::High => "Alto",
            RiskLevel::Critical => "Crítico",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#43a047",
            RiskLevel::Medium => "#fdd835",
            RiskLevel::High => "#fb8c00",
            RiskLevel::Critical => "#e53935",
        }
    }
}

/// One band of the bounded legend: level plus explicit numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskBand {
    pub level: RiskLevel,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub color: &'static str,
}

/// Classify a score into its band. Band boundaries are inclusive on the
/// upper end: a score exactly equal to `low_max` is Low, not Medium. Scores
/// at or below zero (or non-finite) fall back to the lowest band rather than
/// erroring.
pub fn classify(score: f64, ranges: &RiskRangeConfig) -> RiskLevel {
    if !score.is_finite() {
        warn!(score, "non-finite risk score, defaulting to lowest band");
        return RiskLevel::Low;
    }
    if score <= ranges.low_max {
        RiskLevel::Low
    } else if score <= ranges.medium_max {
        RiskLevel::Medium
    } else if score <= ranges.high_max {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// The bounded legend derived from the same thresholds as [`classify`]:
/// four contiguous bands tiling [1, 25], each with explicit min/max for
/// rendering. Deriving both APIs from one `RiskRangeConfig` keeps the legend
/// and the classifier from ever disagreeing.
pub fn band_legend(ranges: &RiskRangeConfig) -> Vec<RiskBand> {
    let bounds = [
        (RiskLevel::Low, LEGEND_MIN, ranges.low_max),
        (RiskLevel::Medium, ranges.low_max + 1.0, ranges.medium_max),
        (RiskLevel::High, ranges.medium_max + 1.0, ranges.high_max),
        (RiskLevel::Critical, ranges.high_max + 1.0, LEGEND_MAX),
    ];

    bounds
        .into_iter()
        .map(|(level, min, max)| RiskBand {
            level,
            label: level.label(),
            min,
            max,
            color: level.color(),
        })
        .collect()
}
