use crate::models::{AggregatedValidationStatus, ValidationStatus, ValidationSummary};

/// Aggregate the per-process validation links of a risk into one overall
/// status plus the per-bucket breakdown.
///
/// Most severe status wins, evaluated in strict precedence order regardless
/// of counts: any rejection dominates, then any observation, then full
/// validation, then partial validation, then pending. No links at all is
/// reported as pending with a zero total, which consumers render as "no
/// processes associated".
pub fn aggregate_validation(links: &[ValidationStatus]) -> ValidationSummary {
    let mut validated = 0;
    let mut observed = 0;
    let mut rejected = 0;
    let mut pending = 0;

    for link in links {
        match link {
            ValidationStatus::Validated => validated += 1,
            ValidationStatus::Observed => observed += 1,
            ValidationStatus::Rejected => rejected += 1,
            ValidationStatus::PendingValidation => pending += 1,
        }
    }

    let total = links.len();
    let status = if total == 0 {
        AggregatedValidationStatus::PendingValidation
    } else if rejected > 0 {
        AggregatedValidationStatus::Rejected
    } else if observed > 0 {
        AggregatedValidationStatus::Observed
    } else if validated == total {
        AggregatedValidationStatus::Validated
    } else if validated > 0 {
        AggregatedValidationStatus::PartiallyValidated
    } else {
        AggregatedValidationStatus::PendingValidation
    };

    ValidationSummary {
        status,
        validated,
        observed,
        rejected,
        pending,
        total,
    }
}
