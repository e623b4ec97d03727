use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Process-wide risk band thresholds. Bands are contiguous and
/// upper-inclusive: Low is `[.., low_max]`, Medium `(low_max, medium_max]`,
/// High `(medium_max, high_max]`, Critical everything above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRangeConfig {
    pub low_max: f64,
    pub medium_max: f64,
    pub high_max: f64,
}

impl RiskRangeConfig {
    /// Thresholds must be positive and strictly increasing for the bands to
    /// stay contiguous and non-empty.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.low_max <= 0.0 {
            return Err(EngineError::OutOfRange {
                field: "low_max",
                value: self.low_max,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        if self.medium_max <= self.low_max || self.high_max <= self.medium_max {
            return Err(EngineError::InvalidArgument(format!(
                "risk range thresholds must be strictly increasing: {} / {} / {}",
                self.low_max, self.medium_max, self.high_max
            )));
        }
        Ok(())
    }
}

impl Default for RiskRangeConfig {
    fn default() -> Self {
        Self {
            low_max: 6.0,
            medium_max: 12.0,
            high_max: 19.0,
        }
    }
}

/// Process-wide rounding policy for computed scores. When disabled, scores
/// round to integers; when enabled, to `precision` decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimalConfig {
    pub enabled: bool,
    pub precision: u32,
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            precision: 0,
        }
    }
}

/// Seam to the external configuration store. `None` means the value has not
/// been loaded yet (expected during initial page load); callers fall back to
/// the `Default` values above rather than failing.
pub trait ConfigProvider: Send + Sync {
    fn ranges(&self) -> Option<RiskRangeConfig>;

    fn decimals(&self) -> Option<DecimalConfig>;
}

/// In-memory provider holding fixed configuration values. Used as the test
/// substitute and as the simplest production wiring when the surrounding
/// application resolves configuration itself.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    pub ranges: Option<RiskRangeConfig>,
    pub decimals: Option<DecimalConfig>,
}

impl StaticConfig {
    pub fn new(ranges: RiskRangeConfig, decimals: DecimalConfig) -> Self {
        Self {
            ranges: Some(ranges),
            decimals: Some(decimals),
        }
    }
}

impl ConfigProvider for StaticConfig {
    fn ranges(&self) -> Option<RiskRangeConfig> {
        self.ranges
    }

    fn decimals(&self) -> Option<DecimalConfig> {
        self.decimals
    }
}
