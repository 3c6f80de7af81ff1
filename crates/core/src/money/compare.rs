//! Equality and ordering.
//!
//! Two values are equal when both the amount and the currency match.
//! Against a plain number, a value is equal only when both are zero; zero is
//! the one currency-agnostic amount. Ordering against a plain number reads
//! the number in the value's own currency.
//!
//! The operator forms cannot fail, so values of different currencies are
//! simply incomparable there (`a < b` and `a > b` are both false). Use
//! [`Money::compare`] and the `try_*` methods to get a `CurrencyMismatch`.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::coerce::{IntoOperand, Operand};
use super::error::{MoneyError, MoneyResult};
use super::types::Money;

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.same_currency(other) && self.amount == other.amount
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_currency(other) {
            self.amount.partial_cmp(&other.amount)
        } else {
            None
        }
    }
}

impl Money {
    /// Orders against another value of the same currency, or against a
    /// plain number read in this value's currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` when the other value has a different currency.
    pub fn compare(&self, other: impl IntoOperand) -> MoneyResult<Ordering> {
        self.compare_operand(&other.into_operand()?)
    }

    /// Fallible `<`.
    pub fn try_lt(&self, other: impl IntoOperand) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Fallible `>`.
    pub fn try_gt(&self, other: impl IntoOperand) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Fallible `<=`, i.e. `<` or `==`.
    pub fn try_le(&self, other: impl IntoOperand) -> MoneyResult<bool> {
        let other = other.into_operand()?;
        Ok(self.compare_operand(&other)? == Ordering::Less || self.equals_operand(&other))
    }

    /// Fallible `>=`, i.e. `>` or `==`.
    pub fn try_ge(&self, other: impl IntoOperand) -> MoneyResult<bool> {
        let other = other.into_operand()?;
        Ok(self.compare_operand(&other)? == Ordering::Greater || self.equals_operand(&other))
    }

    fn compare_operand(&self, other: &Operand) -> MoneyResult<Ordering> {
        match other {
            Operand::Money(other) if self.same_currency(other) => Ok(self.amount.cmp(&other.amount)),
            Operand::Money(other) => Err(MoneyError::mismatch(self.code(), other.code())),
            Operand::Scalar(value) => Ok(self.amount.cmp(value)),
        }
    }

    fn equals_operand(&self, other: &Operand) -> bool {
        match other {
            Operand::Money(other) => self == other,
            Operand::Scalar(value) => self.amount.is_zero() && value.is_zero(),
        }
    }

    fn partial_cmp_scalar(&self, value: Decimal) -> Option<Ordering> {
        match self.amount.cmp(&value) {
            // equal non-zero amounts are not `==`, so they cannot be `Equal`
            Ordering::Equal if !value.is_zero() => None,
            ordering => Some(ordering),
        }
    }
}

macro_rules! scalar_cmp {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Money {
                fn eq(&self, other: &$ty) -> bool {
                    self.amount.is_zero() && Decimal::from(*other).is_zero()
                }
            }

            impl PartialEq<Money> for $ty {
                fn eq(&self, other: &Money) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$ty> for Money {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    self.partial_cmp_scalar(Decimal::from(*other))
                }
            }

            impl PartialOrd<Money> for $ty {
                fn partial_cmp(&self, other: &Money) -> Option<Ordering> {
                    other.partial_cmp_scalar(Decimal::from(*self)).map(Ordering::reverse)
                }
            }
        )*
    };
}

scalar_cmp!(Decimal, i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn money(amount: Decimal, code: &str) -> Money {
        Money::new(amount, code).unwrap()
    }

    #[test]
    fn test_equality_between_values() {
        assert_eq!(money(dec!(10), "USD"), money(dec!(10), "USD"));
        assert_eq!(money(dec!(10), "USD"), money(dec!(10.00), "USD"));
        assert_ne!(money(dec!(10), "USD"), money(dec!(11), "USD"));
        assert_ne!(money(dec!(10), "USD"), money(dec!(10), "JPY"));
    }

    #[test]
    fn test_equality_with_scalars() {
        assert!(money(dec!(10), "USD") != 10);
        assert!(money(dec!(0), "USD") == 0);
        assert!(0 == money(dec!(0), "JPY"));
        assert!(money(dec!(0.00), "USD") == Decimal::ZERO);
        assert!(money(dec!(10), "USD") != dec!(10));
    }

    #[test]
    fn test_ordering_same_currency() {
        assert!(money(dec!(10), "USD") < money(dec!(11), "USD"));
        assert!(money(dec!(12), "USD") > money(dec!(11), "USD"));
        assert!(money(dec!(11), "USD") <= money(dec!(11), "USD"));
        assert!(money(dec!(11), "USD") >= money(dec!(11.00), "USD"));
    }

    #[test]
    fn test_ordering_across_currencies_is_incomparable() {
        let usd = money(dec!(10), "USD");
        let jpy = money(dec!(10), "JPY");
        assert_eq!(usd.partial_cmp(&jpy), None);
        assert!(!(usd < jpy));
        assert!(!(usd > jpy));
    }

    #[test]
    fn test_ordering_with_scalars() {
        let value = money(dec!(10), "USD");
        assert!(value < 11);
        assert!(value > 9);
        assert!(value < dec!(10.01));
        assert!(9 < value);
        assert!(11 > value);
        assert!(value <= 11);
        // `<=` is `<` or `==`, and 10 USD is not equal to 10
        assert!(!(value <= 10));
        assert!(!(value >= 10));
        assert!(money(dec!(0), "USD") <= 0);
    }

    #[test]
    fn test_compare_mismatch() {
        let usd = money(dec!(10), "USD");
        let jpy = money(dec!(10), "JPY");
        let expected = MoneyError::CurrencyMismatch {
            left: "USD".into(),
            right: "JPY".into(),
        };
        assert_eq!(usd.try_lt(&jpy).unwrap_err(), expected);
        assert_eq!(usd.try_ge(&jpy).unwrap_err(), expected);
        assert_eq!(usd.compare(&jpy).unwrap_err(), expected);
    }

    #[rstest]
    #[case(dec!(10), dec!(11), true, false, true, false)]
    #[case(dec!(11), dec!(10), false, true, false, true)]
    #[case(dec!(10), dec!(10), false, false, true, true)]
    fn test_try_forms_between_values(
        #[case] left: Decimal,
        #[case] right: Decimal,
        #[case] lt: bool,
        #[case] gt: bool,
        #[case] le: bool,
        #[case] ge: bool,
    ) {
        let left = money(left, "EUR");
        let right = money(right, "EUR");
        assert_eq!(left.try_lt(&right).unwrap(), lt);
        assert_eq!(left.try_gt(&right).unwrap(), gt);
        assert_eq!(left.try_le(&right).unwrap(), le);
        assert_eq!(left.try_ge(&right).unwrap(), ge);
    }

    #[test]
    fn test_try_forms_with_scalars() {
        let value = money(dec!(5), "USD");
        assert!(value.try_lt("5.01").unwrap());
        assert!(value.try_gt(4).unwrap());
        assert!(!value.try_le(5).unwrap());
        assert_eq!(value.compare(5).unwrap(), Ordering::Equal);
        assert!(money(dec!(0), "USD").try_ge(0).unwrap());
        assert!(matches!(
            value.try_lt("five"),
            Err(MoneyError::InvalidAmount(_))
        ));
    }
}
