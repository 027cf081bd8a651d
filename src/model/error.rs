// src/model/error.rs

use thiserror::Error;

/// Raised when the EOQ formula is mathematically undefined for the given
/// parameters (division by zero or square root of a non-positive quotient).
///
/// The calculator fails fast: no partial results, and retrying with the same
/// inputs always fails identically.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("annual demand must be positive, got {0}")]
    NonPositiveDemand(f64),

    #[error("order cost must be positive, got {0}")]
    NonPositiveOrderCost(f64),

    #[error("holding cost must be positive, got {0}")]
    NonPositiveHoldingCost(f64),

    #[error("inputs must be finite numbers")]
    NonFinite,
}
