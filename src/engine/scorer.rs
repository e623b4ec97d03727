use crate::config::{ConfigProvider, DecimalConfig, RiskRangeConfig};
use crate::engine::classify::{band_legend, classify, RiskBand, RiskLevel};
use crate::engine::inherent::{impact_from_factors, inherent_risk};
use crate::engine::residual::{residual_risk, ResidualRisk, ResidualStrategy};
use crate::engine::validation::aggregate_validation;
use crate::models::{
    ControlEffect, ImpactFactors, ImpactWeights, RiskFactors, ValidationStatus, ValidationSummary,
};
use tracing::warn;

/// Scoring facade holding an immutable snapshot of the process
/// configuration. The snapshot is taken once, at construction; refreshing
/// configuration means building a new scorer. Everything here is pure and
/// synchronous, so sharing one scorer across concurrent calculations needs
/// no locking.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    ranges: RiskRangeConfig,
    decimals: DecimalConfig,
}

impl RiskScorer {
    /// Scorer with the documented fallback configuration (ranges 6/12/19,
    /// integer rounding).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(ranges: RiskRangeConfig, decimals: DecimalConfig) -> Self {
        Self { ranges, decimals }
    }

    /// Resolve configuration through the provider, falling back to defaults
    /// for anything not yet loaded. Missing configuration is expected during
    /// initial load and is never an error.
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        let ranges = match provider.ranges() {
            Some(ranges) => match ranges.validate() {
                Ok(()) => ranges,
                Err(err) => {
                    warn!(%err, "invalid risk range configuration, using defaults");
                    RiskRangeConfig::default()
                }
            },
            None => {
                warn!("risk range configuration not loaded, using defaults");
                RiskRangeConfig::default()
            }
        };
        let decimals = provider.decimals().unwrap_or_else(|| {
            warn!("decimal configuration not loaded, using defaults");
            DecimalConfig::default()
        });
        Self { ranges, decimals }
    }

    pub fn ranges(&self) -> &RiskRangeConfig {
        &self.ranges
    }

    pub fn decimals(&self) -> &DecimalConfig {
        &self.decimals
    }

    pub fn inherent_risk(&self, probability: f64, impact: f64) -> f64 {
        inherent_risk(probability, impact, &self.decimals)
    }

    pub fn impact_from_factors(
        &self,
        factors: &ImpactFactors,
        weights: Option<&ImpactWeights>,
    ) -> f64 {
        impact_from_factors(factors, weights)
    }

    /// Build the probability/impact pair for a risk scored against the seven
    /// impact dimensions.
    pub fn risk_factors(
        &self,
        probability: f64,
        impact: &ImpactFactors,
        weights: Option<&ImpactWeights>,
    ) -> RiskFactors {
        RiskFactors {
            probability,
            impact: impact_from_factors(impact, weights),
        }
    }

    pub fn inherent_risk_of(&self, factors: &RiskFactors) -> f64 {
        self.inherent_risk(factors.probability, factors.impact)
    }

    pub fn residual_risk(
        &self,
        probability: f64,
        impact: f64,
        controls: &[ControlEffect],
        strategy: ResidualStrategy,
    ) -> ResidualRisk {
        residual_risk(probability, impact, controls, strategy, &self.decimals)
    }

    pub fn classify(&self, score: f64) -> RiskLevel {
        classify(score, &self.ranges)
    }

    pub fn band_legend(&self) -> Vec<RiskBand> {
        band_legend(&self.ranges)
    }

    pub fn aggregate_validation(&self, links: &[ValidationStatus]) -> ValidationSummary {
        aggregate_validation(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticConfig;

    #[test]
    fn from_empty_provider_uses_documented_defaults() {
        let scorer = RiskScorer::from_provider(&StaticConfig::default());
        assert_eq!(scorer.ranges().low_max, 6.0);
        assert_eq!(scorer.ranges().medium_max, 12.0);
        assert_eq!(scorer.ranges().high_max, 19.0);
        assert!(!scorer.decimals().enabled);
    }

    #[test]
    fn from_provider_discards_invalid_ranges() {
        let provider = StaticConfig {
            ranges: Some(RiskRangeConfig {
                low_max: 12.0,
                medium_max: 6.0,
                high_max: 19.0,
            }),
            decimals: None,
        };
        let scorer = RiskScorer::from_provider(&provider);
        assert_eq!(scorer.ranges().low_max, 6.0);
        assert_eq!(scorer.ranges().medium_max, 12.0);
    }

    #[test]
    fn from_provider_takes_loaded_values() {
        let provider = StaticConfig::new(
            RiskRangeConfig {
                low_max: 4.0,
                medium_max: 9.0,
                high_max: 16.0,
            },
            DecimalConfig {
                enabled: true,
                precision: 1,
            },
        );
        let scorer = RiskScorer::from_provider(&provider);
        assert_eq!(scorer.classify(4.0), RiskLevel::Low);
        assert_eq!(scorer.classify(5.0), RiskLevel::Medium);
        assert_eq!(scorer.inherent_risk(2.5, 1.0), 2.5);
    }

    #[test]
    fn scorer_round_trips_inherent_and_classification() {
        let scorer = RiskScorer::new();
        let score = scorer.inherent_risk(5.0, 5.0);
        assert_eq!(score, 25.0);
        assert_eq!(scorer.classify(score), RiskLevel::Critical);
    }

    #[test]
    fn risk_factors_take_worst_impact_dimension() {
        let scorer = RiskScorer::new();
        let impact = ImpactFactors {
            infrastructure: 1.0,
            reputation: 2.0,
            economic: 1.0,
            permits: 1.0,
            knowhow: 1.0,
            people: 4.0,
            information: 1.0,
        };
        let factors = scorer.risk_factors(3.0, &impact, None);
        assert_eq!(factors.impact, 4.0);
        assert_eq!(scorer.inherent_risk_of(&factors), 12.0);
    }
}
