// src/analysis/curve.rs

use crate::analysis::calculator::total_cost_at;
use crate::model::inputs::EoqInputs;
use serde::{Deserialize, Serialize};

/// One sample of the total-cost curve: the annual cost of always ordering
/// `order_quantity` units at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub order_quantity: u32,
    pub total_cost: f64,
}

/// Evaluates the total-cost function over the integer quantities
/// 1..floor(2*EOQ), i.e. every positive order size strictly below twice
/// the optimum. The result is ordered by increasing quantity and sized for
/// direct plotting.
///
/// The range is empty when the EOQ is below 1; callers get an empty curve
/// rather than an error.
pub fn cost_curve(inputs: &EoqInputs, eoq: f64) -> Vec<CurvePoint> {
    let upper = (2.0 * eoq).floor();
    if upper <= 1.0 {
        return Vec::new();
    }

    (1..upper as u32)
        .map(|q| CurvePoint {
            order_quantity: q,
            total_cost: total_cost_at(inputs, f64::from(q)),
        })
        .collect()
}

/// The cheapest sampled point on the curve, i.e. the best integer order
/// quantity in the evaluated range. `None` on an empty curve.
pub fn curve_minimum(points: &[CurvePoint]) -> Option<&CurvePoint> {
    points
        .iter()
        .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
}
