use serde::{Deserialize, Serialize};

/// Probability and impact of a risk, both on the 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub probability: f64,
    pub impact: f64,
}

/// The seven impact dimensions a risk is scored against, each on the 1–5
/// scale. Overall impact is the worst dimension, not an average: a single
/// catastrophic score (e.g. a fatality under `people`) must not be diluted
/// by low scores elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactFactors {
    pub infrastructure: f64,
    pub reputation: f64,
    pub economic: f64,
    pub permits: f64,
    pub knowhow: f64,
    pub people: f64,
    pub information: f64,
}

impl ImpactFactors {
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.infrastructure,
            self.reputation,
            self.economic,
            self.permits,
            self.knowhow,
            self.people,
            self.information,
        ]
    }
}

/// Per-dimension weights for impact aggregation. Accepted by the aggregator
/// for forward compatibility but not applied today: the aggregation policy is
/// worst-dimension-wins regardless of weights. Tests pin that varying these
/// has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactWeights {
    pub infrastructure: f64,
    pub reputation: f64,
    pub economic: f64,
    pub permits: f64,
    pub knowhow: f64,
    pub people: f64,
    pub information: f64,
}

impl Default for ImpactWeights {
    fn default() -> Self {
        Self {
            infrastructure: 1.0,
            reputation: 1.0,
            economic: 1.0,
            permits: 1.0,
            knowhow: 1.0,
            people: 1.0,
            information: 1.0,
        }
    }
}
