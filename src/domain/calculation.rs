use super::inputs::{DeliveryCost, DiscountRate, ItemName, Quantity, TaxRate, UnitCost};
use crate::error::{CostError, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// One complete, valid set of pricing inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostInputs {
    pub item_name: ItemName,
    pub cost_per_item: UnitCost,
    pub quantity: Quantity,
    pub delivery_cost: DeliveryCost,
    pub tax_rate: TaxRate,
    pub discount_rate: DiscountRate,
}

/// Totals derived from a [`CostInputs`].
///
/// Values keep full decimal precision; rounding to cents happens only when
/// the breakdown is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Unit cost times quantity.
    pub items_subtotal: Decimal,
    /// Items subtotal plus delivery.
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    /// Subtotal minus discount; the amount tax is charged on.
    pub discounted_subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total_cost: Decimal,
}

impl CostBreakdown {
    /// Prices `inputs`.
    ///
    /// The order is fixed: delivery is part of the subtotal, the discount comes
    /// off the whole subtotal, and tax is charged on what remains.
    ///
    /// Fails with [`CostError::Overflow`] when any intermediate amount leaves
    /// the range of `Decimal`.
    pub fn compute(inputs: &CostInputs) -> Result<Self> {
        let items_subtotal = inputs
            .cost_per_item
            .value()
            .checked_mul(Decimal::from(inputs.quantity.value()))
            .ok_or(CostError::Overflow)?;
        let subtotal = items_subtotal
            .checked_add(inputs.delivery_cost.value())
            .ok_or(CostError::Overflow)?;

        let discount_amount = subtotal
            .checked_mul(inputs.discount_rate.value())
            .ok_or(CostError::Overflow)?;
        let discounted_subtotal = subtotal
            .checked_sub(discount_amount)
            .ok_or(CostError::Overflow)?;

        let tax_amount = discounted_subtotal
            .checked_mul(inputs.tax_rate.value())
            .ok_or(CostError::Overflow)?;
        let total_cost = discounted_subtotal
            .checked_add(tax_amount)
            .ok_or(CostError::Overflow)?;

        Ok(Self {
            items_subtotal,
            subtotal,
            discount_amount,
            discounted_subtotal,
            tax_amount,
            total_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inputs(cost: Decimal, qty: u32, delivery: Decimal, tax: Decimal, discount: Decimal) -> CostInputs {
        CostInputs {
            item_name: ItemName::default(),
            cost_per_item: UnitCost::new(cost).unwrap(),
            quantity: Quantity::new(qty).unwrap(),
            delivery_cost: DeliveryCost::new(delivery).unwrap(),
            tax_rate: TaxRate::new(tax).unwrap(),
            discount_rate: DiscountRate::new(discount).unwrap(),
        }
    }

    #[test]
    fn test_full_breakdown() {
        let breakdown = CostBreakdown::compute(&inputs(
            dec!(100.00),
            3,
            dec!(20.00),
            dec!(0.08),
            dec!(0.10),
        ))
        .unwrap();

        assert_eq!(breakdown.items_subtotal, dec!(300.00));
        assert_eq!(breakdown.subtotal, dec!(320.00));
        assert_eq!(breakdown.discount_amount, dec!(32.00));
        assert_eq!(breakdown.discounted_subtotal, dec!(288.00));
        assert_eq!(breakdown.tax_amount, dec!(23.04));
        assert_eq!(breakdown.total_cost, dec!(311.04));
    }

    #[test]
    fn test_no_tax_no_discount() {
        let breakdown = CostBreakdown::compute(&inputs(
            dec!(50.00),
            1,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        ))
        .unwrap();

        assert_eq!(breakdown.subtotal, dec!(50.00));
        assert_eq!(breakdown.discount_amount, Decimal::ZERO);
        assert_eq!(breakdown.tax_amount, Decimal::ZERO);
        assert_eq!(breakdown.total_cost, dec!(50.00));
    }

    #[test]
    fn test_discount_applies_before_tax() {
        let breakdown = CostBreakdown::compute(&inputs(
            dec!(100),
            1,
            Decimal::ZERO,
            dec!(0.10),
            dec!(0.50),
        ))
        .unwrap();

        // Half of the pre-tax 100, not half of a taxed 110.
        assert_eq!(breakdown.discount_amount, dec!(50));
        assert_eq!(breakdown.discounted_subtotal, dec!(50));
        assert_eq!(breakdown.tax_amount, dec!(5));
        assert_eq!(breakdown.total_cost, dec!(55));
    }

    #[test]
    fn test_discount_covers_delivery() {
        let breakdown = CostBreakdown::compute(&inputs(
            dec!(10),
            2,
            dec!(80),
            Decimal::ZERO,
            dec!(0.5),
        ))
        .unwrap();

        assert_eq!(breakdown.subtotal, dec!(100));
        assert_eq!(breakdown.discount_amount, dec!(50));
        assert_eq!(breakdown.total_cost, dec!(50));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let inputs = inputs(dec!(19.99), 7, dec!(4.5), dec!(0.17), dec!(0.33));
        assert_eq!(
            CostBreakdown::compute(&inputs).unwrap(),
            CostBreakdown::compute(&inputs).unwrap()
        );
    }

    #[test]
    fn test_items_subtotal_overflow_is_an_error() {
        let result = CostBreakdown::compute(&inputs(
            Decimal::MAX,
            2,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        ));
        assert!(matches!(result, Err(CostError::Overflow)));
    }

    #[test]
    fn test_total_overflow_at_full_tax_is_an_error() {
        let result = CostBreakdown::compute(&inputs(
            Decimal::MAX,
            1,
            Decimal::ZERO,
            Decimal::ONE,
            Decimal::ZERO,
        ));
        assert!(matches!(result, Err(CostError::Overflow)));
    }

    #[test]
    fn test_delivery_overflow_is_an_error() {
        let result = CostBreakdown::compute(&inputs(
            Decimal::MAX,
            1,
            Decimal::MAX,
            Decimal::ZERO,
            Decimal::ZERO,
        ));
        assert!(matches!(result, Err(CostError::Overflow)));
    }
}
