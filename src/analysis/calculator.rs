// src/analysis/calculator.rs

use crate::model::error::DomainError;
use crate::model::inputs::EoqInputs;
use serde::Serialize;

/// The three scalar results of an EOQ evaluation.
///
/// Values are kept at full double precision; rounding to 2 decimals is a
/// display concern and happens in the reporting layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EoqAnalysis {
    /// The order size minimizing total annual inventory cost.
    pub eoq: f64,
    /// D / EOQ.
    pub orders_per_year: f64,
    /// Annual ordering cost plus annual holding cost at the EOQ.
    pub total_cost: f64,
}

/// Total annual inventory cost for an arbitrary order quantity.
///
/// f(q) = (D/q)*S + (q/2)*H. Ordering cost falls and holding cost rises
/// monotonically with q; the sum is convex and minimized exactly at the EOQ.
pub fn total_cost_at(inputs: &EoqInputs, quantity: f64) -> f64 {
    (inputs.annual_demand / quantity) * inputs.order_cost
        + (quantity / 2.0) * inputs.holding_cost
}

/// Computes the Economic Order Quantity and its derived metrics.
///
/// EOQ = sqrt(2*D*S / H), the closed-form minimizer of `total_cost_at`,
/// obtained by setting the derivative of the cost function to zero.
pub fn compute(inputs: &EoqInputs) -> Result<EoqAnalysis, DomainError> {
    inputs.validate()?;

    let eoq =
        (2.0 * inputs.annual_demand * inputs.order_cost / inputs.holding_cost).sqrt();
    let orders_per_year = inputs.annual_demand / eoq;
    let total_cost = total_cost_at(inputs, eoq);

    Ok(EoqAnalysis {
        eoq,
        orders_per_year,
        total_cost,
    })
}
