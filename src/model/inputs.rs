// src/model/inputs.rs

use crate::model::error::DomainError;
use serde::Serialize;

/// The three parameters of the classic EOQ model.
///
/// All values are plain annual figures; there is no time dimension beyond
/// "per year" and no lifecycle beyond a single evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EoqInputs {
    /// D: total units required per year.
    pub annual_demand: f64,
    /// S: fixed cost incurred per order placed, independent of quantity.
    pub order_cost: f64,
    /// H: cost to store one unit for one year.
    pub holding_cost: f64,
}

impl EoqInputs {
    pub fn new(annual_demand: f64, order_cost: f64, holding_cost: f64) -> Self {
        Self {
            annual_demand,
            order_cost,
            holding_cost,
        }
    }

    /// Checks that the formula is defined for these parameters.
    ///
    /// H must be strictly positive (it is the divisor), D must be strictly
    /// positive (EOQ is undefined for zero demand), and S must be strictly
    /// positive (S = 0 gives EOQ = 0, which makes orders-per-year a division
    /// by zero).
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.annual_demand.is_finite()
            || !self.order_cost.is_finite()
            || !self.holding_cost.is_finite()
        {
            return Err(DomainError::NonFinite);
        }
        if self.annual_demand <= 0.0 {
            return Err(DomainError::NonPositiveDemand(self.annual_demand));
        }
        if self.order_cost <= 0.0 {
            return Err(DomainError::NonPositiveOrderCost(self.order_cost));
        }
        if self.holding_cost <= 0.0 {
            return Err(DomainError::NonPositiveHoldingCost(self.holding_cost));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_parameters() {
        let inputs = EoqInputs::new(1000.0, 50000.0, 2000.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn rejects_zero_holding_cost() {
        let inputs = EoqInputs::new(1000.0, 50000.0, 0.0);
        assert_eq!(
            inputs.validate(),
            Err(DomainError::NonPositiveHoldingCost(0.0))
        );
    }

    #[test]
    fn rejects_zero_demand() {
        let inputs = EoqInputs::new(0.0, 50000.0, 2000.0);
        assert_eq!(inputs.validate(), Err(DomainError::NonPositiveDemand(0.0)));
    }

    #[test]
    fn rejects_zero_order_cost() {
        let inputs = EoqInputs::new(1000.0, 0.0, 2000.0);
        assert_eq!(inputs.validate(), Err(DomainError::NonPositiveOrderCost(0.0)));
    }

    #[test]
    fn rejects_negative_holding_cost() {
        let inputs = EoqInputs::new(1000.0, 50000.0, -5.0);
        assert_eq!(
            inputs.validate(),
            Err(DomainError::NonPositiveHoldingCost(-5.0))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let inputs = EoqInputs::new(f64::NAN, 50000.0, 2000.0);
        assert_eq!(inputs.validate(), Err(DomainError::NonFinite));

        let inputs = EoqInputs::new(1000.0, f64::INFINITY, 2000.0);
        assert_eq!(inputs.validate(), Err(DomainError::NonFinite));
    }
}
