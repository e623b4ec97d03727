use serde::{Deserialize, Serialize};

/// Validation state of one risk-process link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    PendingValidation,
    Validated,
    Observed,
    Rejected,
}

/// Overall validation state of a risk, derived from all of its per-process
/// links. Never stored; always recomputed from current link states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregatedValidationStatus {
    Validated,
    PartiallyValidated,
    PendingValidation,
    Rejected,
    Observed,
}

/// Aggregate label plus the per-bucket breakdown. Consumers display both, so
/// the counts travel with the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub status: AggregatedValidationStatus,
    pub validated: usize,
    pub observed: usize,
    pub rejected: usize,
    pub pending: usize,
    pub total: usize,
}
