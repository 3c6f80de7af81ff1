//! Property-based tests for the Money value type.
//!
//! - Allocation conserves the total and the number of shares
//! - Same-currency add then subtract is exact
//! - Display output parses back to an equal value

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::Money;
use crate::currency::CurrencyContext;

/// Amounts with cent precision (-1,000,000.00 to 1,000,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Amounts with up to six decimal places.
fn fine_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..=6).prop_map(|(v, scale)| Decimal::new(v, scale))
}

/// 1-12 non-negative ratios, at least one positive.
fn ratios() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1000, 1..12)
        .prop_filter("ratios must not sum to zero", |r| r.iter().any(|v| *v > 0))
}

/// Registered codes with at least `min_places` decimal places.
fn catalog_code(min_places: u32) -> impl Strategy<Value = String> {
    let codes: Vec<String> = CurrencyContext::new()
        .currencies()
        .iter()
        .filter(|currency| currency.decimal_places() >= min_places)
        .map(|currency| currency.code().to_string())
        .collect();
    prop::sample::select(codes)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount and ratios, the shares SHALL sum exactly to the amount.
    #[test]
    fn prop_allocation_conserves_total(
        amount in fine_amount(),
        code in catalog_code(0),
        ratios in ratios(),
    ) {
        let money = Money::new(amount, code.as_str()).unwrap();
        let shares = money.allocate(ratios.iter().copied()).unwrap();

        let total: Decimal = shares.iter().map(|share| share.amount).sum();
        prop_assert_eq!(total, amount);
        prop_assert_eq!(shares.len(), ratios.len());
        prop_assert!(shares.iter().all(|share| share.code() == code.as_str()));
    }

    /// *For any* ratios, a zero ratio SHALL produce a zero share.
    #[test]
    fn prop_allocation_zero_ratio_is_zero(
        amount in cent_amount(),
        ratios in ratios(),
    ) {
        let money = Money::new(amount, "USD").unwrap();
        let shares = money.allocate(ratios.iter().copied()).unwrap();

        for (share, ratio) in shares.iter().zip(&ratios) {
            if *ratio == 0 {
                prop_assert!(share.is_zero());
            }
        }
    }

    /// *For any* a and b in one currency, a + b - b SHALL equal a.
    #[test]
    fn prop_add_then_sub_is_identity(
        a in fine_amount(),
        b in fine_amount(),
        code in catalog_code(0),
    ) {
        let a = Money::new(a, code.as_str()).unwrap();
        let b = Money::new(b, code.as_str()).unwrap();

        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(a.checked_add(&b).unwrap().checked_sub(&b).unwrap(), a);
    }

    /// *For any* cent amount, parsing the display form SHALL give back the value.
    #[test]
    fn prop_display_round_trip(
        amount in cent_amount(),
        code in catalog_code(2),
    ) {
        let money = Money::new(amount, code.as_str()).unwrap();
        let parsed = Money::from_string(&money.to_string()).unwrap();
        prop_assert_eq!(parsed, money);
    }
}
