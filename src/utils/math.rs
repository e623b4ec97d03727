use crate::config::DecimalConfig;
use crate::error::EngineError;

/// Round half-up to `precision` decimal places. `f64::round` rounds halves
/// away from zero, which for the non-negative scores this engine produces is
/// the half-up contract.
pub fn round_half_up(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Round a computed score per the process rounding policy: integers when
/// decimals are disabled, else `precision` decimal places.
pub fn round_score(value: f64, decimals: &DecimalConfig) -> f64 {
    if decimals.enabled {
        round_half_up(value, decimals.precision)
    } else {
        value.round()
    }
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Weighted average of `values` with parallel `weights`. Mismatched lengths
/// signal a caller bug and fail synchronously; so does an empty input or a
/// zero total weight.
pub fn weighted_average(values: &[f64], weights: &[f64]) -> Result<f64, EngineError> {
    if values.len() != weights.len() {
        return Err(EngineError::MismatchedLengths {
            left_name: "values",
            left_len: values.len(),
            right_name: "weights",
            right_len: weights.len(),
        });
    }
    if values.is_empty() {
        return Err(EngineError::InvalidArgument(
            "weighted average of empty input".to_string(),
        ));
    }

    let total_weight: f64 = weights.iter().sum();
    if total_weight == 0.0 {
        return Err(EngineError::InvalidArgument(
            "total weight is zero".to_string(),
        ));
    }

    let weighted_sum: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    Ok(weighted_sum / total_weight)
}
