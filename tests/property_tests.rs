use costcalc::application::engine::CostEngine;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn rate(basis_points: i64) -> Decimal {
    Decimal::new(basis_points, 4)
}

proptest! {
    #[test]
    fn breakdown_identities_hold(
        cost in 1i64..10_000_000,
        quantity in 1u32..10_000,
        delivery in 0i64..1_000_000,
        tax in 0i64..=10_000,
        discount in 0i64..=5_000,
    ) {
        let (cost, delivery, tax, discount) = (cents(cost), cents(delivery), rate(tax), rate(discount));
        let mut engine = CostEngine::new();
        let b = *engine
            .calculate_advanced_cost(cost, quantity, delivery, tax, discount)
            .unwrap();

        prop_assert_eq!(b.subtotal, cost * Decimal::from(quantity) + delivery);
        prop_assert_eq!(b.discount_amount, b.subtotal * discount);
        prop_assert_eq!(b.tax_amount, (b.subtotal - b.discount_amount) * tax);
        prop_assert_eq!(b.total_cost, b.subtotal - b.discount_amount + b.tax_amount);
        prop_assert!(b.total_cost >= Decimal::ZERO);
    }

    #[test]
    fn apply_discount_matches_set_then_recalculate(
        cost in 1i64..1_000_000,
        quantity in 1u32..1_000,
        percent in 0i64..=50,
    ) {
        let mut applied = CostEngine::new();
        applied.calculate_cost(cents(cost), quantity).unwrap();
        let via_apply = *applied.apply_discount(Decimal::from(percent)).unwrap();

        let mut set = CostEngine::new();
        set.calculate_cost(cents(cost), quantity).unwrap();
        set.set_discount_rate(Decimal::from(percent) / Decimal::ONE_HUNDRED).unwrap();
        let via_set = *set.recalculate().unwrap();

        prop_assert_eq!(via_apply, via_set);
    }

    #[test]
    fn out_of_range_rates_leave_engine_untouched(
        tax in 10_001i64..50_000,
        discount in 5_001i64..10_000,
    ) {
        let mut engine = CostEngine::new();
        engine.calculate_cost(cents(1_000), 1).unwrap();
        let before = *engine.breakdown().unwrap();

        prop_assert!(engine.set_tax_rate(rate(tax)).is_err());
        prop_assert!(engine.set_discount_rate(rate(discount)).is_err());
        prop_assert!(engine.calculate_advanced_cost(cents(5), 5, cents(5), rate(tax), Decimal::ZERO).is_err());
        prop_assert_eq!(engine.breakdown(), Some(&before));
        prop_assert_eq!(engine.cost_per_item(), Some(cents(1_000)));
    }
}
