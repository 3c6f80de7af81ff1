//! Arithmetic on monetary values.
//!
//! Same-currency operations work component-wise on the amount. Adding or
//! subtracting values of different currencies converts BOTH operands into
//! the default currency first and returns a value in that currency. This is
//! only as accurate as the exchange rates kept in the registry; with the
//! default unit rates it silently treats one unit of any currency as one
//! unit of the default. Convert explicitly when that matters.
//!
//! Plain numbers may appear on either side of `+`, `-` and `*`, and both
//! orders give the same result. In particular `k - money` equals
//! `money - k`, not `-(money - k)`. `k % money` is `k` percent of `money`.
//!
//! Operator forms (`+`, `-`, `*`, `/`, `%`) panic where `Decimal` panics
//! (overflow, division by zero). The `checked_*` methods never panic.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use rust_decimal::Decimal;
use tracing::warn;

use super::coerce::{IntoOperand, Operand};
use super::error::{MoneyError, MoneyResult};
use super::types::Money;
use crate::currency::CurrencyContext;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Result of dividing a monetary value.
#[derive(Debug, Clone, PartialEq)]
pub enum Quotient {
    /// Division by a plain number keeps the currency.
    Money(Money),
    /// Division by another value of the same currency is dimensionless.
    Ratio(Decimal),
}

fn overflow() -> MoneyError {
    MoneyError::invalid_operation("arithmetic overflow")
}

impl Money {
    /// Adds another value or a plain number, using the process-wide default
    /// currency for mixed-currency sums.
    pub fn checked_add(&self, rhs: impl IntoOperand) -> MoneyResult<Self> {
        self.checked_add_in(&CurrencyContext::global(), rhs)
    }

    /// Adds another value or a plain number, using the default currency of
    /// `ctx` for mixed-currency sums.
    pub fn checked_add_in(&self, ctx: &CurrencyContext, rhs: impl IntoOperand) -> MoneyResult<Self> {
        self.combine(ctx, rhs.into_operand()?, Decimal::checked_add)
    }

    /// Subtracts another value or a plain number, using the process-wide
    /// default currency for mixed-currency differences.
    pub fn checked_sub(&self, rhs: impl IntoOperand) -> MoneyResult<Self> {
        self.checked_sub_in(&CurrencyContext::global(), rhs)
    }

    /// Subtracts another value or a plain number, using the default currency
    /// of `ctx` for mixed-currency differences.
    pub fn checked_sub_in(&self, ctx: &CurrencyContext, rhs: impl IntoOperand) -> MoneyResult<Self> {
        self.combine(ctx, rhs.into_operand()?, Decimal::checked_sub)
    }

    /// Scales the amount by a plain number.
    ///
    /// Multiplying two monetary values fails with `InvalidOperation`.
    pub fn checked_mul(&self, rhs: impl IntoOperand) -> MoneyResult<Self> {
        match rhs.into_operand()? {
            Operand::Scalar(factor) => self
                .amount
                .checked_mul(factor)
                .map(|amount| self.with_amount(amount))
                .ok_or_else(overflow),
            Operand::Money(_) => Err(MoneyError::invalid_operation(
                "cannot multiply monetary quantities",
            )),
        }
    }

    /// Divides by a plain number (same currency) or by another value of the
    /// same currency (dimensionless ratio).
    pub fn checked_div(&self, rhs: impl IntoOperand) -> MoneyResult<Quotient> {
        match rhs.into_operand()? {
            Operand::Scalar(divisor) => {
                let amount = checked_quotient(self.amount, divisor)?;
                Ok(Quotient::Money(self.with_amount(amount)))
            }
            Operand::Money(other) => self.ratio(&other).map(Quotient::Ratio),
        }
    }

    /// Ratio between two values of the same currency.
    pub fn ratio(&self, other: &Self) -> MoneyResult<Decimal> {
        if !self.same_currency(other) {
            return Err(MoneyError::mismatch(self.code(), other.code()));
        }
        checked_quotient(self.amount, other.amount)
    }

    /// `percent` percent of this value, same currency.
    ///
    /// A monetary percentage fails with `InvalidOperation`.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// let total = Money::new(200, "USD").unwrap();
    /// assert_eq!(total.percentage(5).unwrap().to_string(), "USD 10.00");
    /// ```
    pub fn percentage(&self, percent: impl IntoOperand) -> MoneyResult<Self> {
        match percent.into_operand()? {
            Operand::Scalar(percent) => percent
                .checked_mul(self.amount)
                .and_then(|scaled| scaled.checked_div(HUNDRED))
                .map(|amount| self.with_amount(amount))
                .ok_or_else(overflow),
            Operand::Money(_) => Err(MoneyError::invalid_operation(
                "invalid monetary operation",
            )),
        }
    }

    fn combine(
        &self,
        ctx: &CurrencyContext,
        rhs: Operand,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> MoneyResult<Self> {
        match rhs {
            Operand::Scalar(value) => op(self.amount, value)
                .map(|amount| self.with_amount(amount))
                .ok_or_else(overflow),
            Operand::Money(other) if self.same_currency(&other) => op(self.amount, other.amount)
                .map(|amount| self.with_amount(amount))
                .ok_or_else(overflow),
            Operand::Money(other) => {
                let target = ctx.default_currency();
                let left = self.checked_convert_into(&target)?;
                let right = other.checked_convert_into(&target)?;
                warn!(
                    left = %self.code(),
                    right = %other.code(),
                    into = %target.code(),
                    "Mixed-currency arithmetic converted through the default currency"
                );
                op(left.amount, right.amount)
                    .map(|amount| Self::from_parts(amount, target))
                    .ok_or_else(overflow)
            }
        }
    }

    fn merge(&self, rhs: &Self, op: fn(Decimal, Decimal) -> Decimal) -> Self {
        if self.same_currency(rhs) {
            return self.with_amount(op(self.amount, rhs.amount));
        }

        let target = CurrencyContext::global().default_currency();
        let left = self.amount * self.currency().exchange_rate();
        let right = rhs.amount * rhs.currency().exchange_rate();
        warn!(
            left = %self.code(),
            right = %rhs.code(),
            into = %target.code(),
            "Mixed-currency arithmetic converted through the default currency"
        );
        Self::from_parts(op(left, right), target)
    }
}

fn checked_quotient(dividend: Decimal, divisor: Decimal) -> MoneyResult<Decimal> {
    if divisor.is_zero() {
        return Err(MoneyError::invalid_operation("division by zero"));
    }
    dividend.checked_div(divisor).ok_or_else(overflow)
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.merge(&rhs, |a, b| a + b)
    }
}

impl Add<&Money> for &Money {
    type Output = Money;

    fn add(self, rhs: &Money) -> Money {
        self.merge(rhs, |a, b| a + b)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        self.merge(&rhs, |a, b| a - b)
    }
}

impl Sub<&Money> for &Money {
    type Output = Money;

    fn sub(self, rhs: &Money) -> Money {
        self.merge(rhs, |a, b| a - b)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        -&self
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.with_amount(-self.amount)
    }
}

macro_rules! scalar_ops {
    ($($ty:ty),*) => {
        $(
            impl Add<$ty> for Money {
                type Output = Money;

                fn add(self, rhs: $ty) -> Money {
                    self.with_amount(self.amount + Decimal::from(rhs))
                }
            }

            impl Add<Money> for $ty {
                type Output = Money;

                fn add(self, rhs: Money) -> Money {
                    rhs + self
                }
            }

            impl Sub<$ty> for Money {
                type Output = Money;

                fn sub(self, rhs: $ty) -> Money {
                    self.with_amount(self.amount - Decimal::from(rhs))
                }
            }

            /// Same result as `money - k`.
            impl Sub<Money> for $ty {
                type Output = Money;

                fn sub(self, rhs: Money) -> Money {
                    rhs - self
                }
            }

            impl Mul<$ty> for Money {
                type Output = Money;

                fn mul(self, rhs: $ty) -> Money {
                    self.with_amount(self.amount * Decimal::from(rhs))
                }
            }

            impl Mul<Money> for $ty {
                type Output = Money;

                fn mul(self, rhs: Money) -> Money {
                    rhs * self
                }
            }

            impl Div<$ty> for Money {
                type Output = Money;

                fn div(self, rhs: $ty) -> Money {
                    self.with_amount(self.amount / Decimal::from(rhs))
                }
            }

            /// `k % money` is `k` percent of `money`.
            impl Rem<Money> for $ty {
                type Output = Money;

                fn rem(self, rhs: Money) -> Money {
                    rhs.with_amount(Decimal::from(self) * rhs.amount / HUNDRED)
                }
            }
        )*
    };
}

scalar_ops!(Decimal, i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ctx_with_rates() -> CurrencyContext {
        let ctx = CurrencyContext::new();
        ctx.set_default("USD").unwrap();
        ctx.lookup("EUR").unwrap().set_exchange_rate("1.10").unwrap();
        ctx.lookup("GBP").unwrap().set_exchange_rate("1.25").unwrap();
        ctx
    }

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, "USD").unwrap()
    }

    #[test]
    fn test_add_same_currency() {
        let sum = usd(dec!(10.50)) + usd(dec!(0.25));
        assert_eq!(sum, usd(dec!(10.75)));
        assert_eq!(&usd(dec!(1)) + &usd(dec!(2)), usd(dec!(3)));
    }

    #[test]
    fn test_sub_same_currency() {
        assert_eq!(usd(dec!(10)) - usd(dec!(2.5)), usd(dec!(7.5)));
        assert_eq!(&usd(dec!(1)) - &usd(dec!(2)), usd(dec!(-1)));
    }

    #[test]
    fn test_add_scalars_symmetric() {
        assert_eq!(usd(dec!(10)) + 5, usd(dec!(15)));
        assert_eq!(5 + usd(dec!(10)), usd(dec!(15)));
        assert_eq!(usd(dec!(10)) + dec!(0.01), usd(dec!(10.01)));
        assert_eq!(dec!(0.01) + usd(dec!(10)), usd(dec!(10.01)));
        assert_eq!(usd(dec!(10)) - 3_u32, usd(dec!(7)));
    }

    #[test]
    fn test_checked_add_scalar_kinds() {
        let money = usd(dec!(1));
        assert_eq!(money.checked_add("2.50").unwrap(), usd(dec!(3.50)));
        assert_eq!(money.checked_add(0.5_f64).unwrap(), usd(dec!(1.5)));
        assert_eq!(money.checked_sub(1_i64).unwrap(), usd(dec!(0)));
        assert!(matches!(
            money.checked_add("x"),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_mixed_currency_add_converts_to_default() {
        let ctx = ctx_with_rates();
        let eur = Money::new_in(&ctx, 100, "EUR").unwrap();
        let gbp = Money::new_in(&ctx, 100, "GBP").unwrap();

        let sum = eur.checked_add_in(&ctx, &gbp).unwrap();
        assert_eq!(sum.code(), "USD");
        assert_eq!(sum.amount, dec!(235));

        let diff = gbp.checked_sub_in(&ctx, &eur).unwrap();
        assert_eq!(diff.code(), "USD");
        assert_eq!(diff.amount, dec!(15));
    }

    #[test]
    fn test_mixed_currency_operator_uses_global_default() {
        // global default stays at the XXX sentinel in unit tests, rates at 1
        let sum = Money::new(1, "EUR").unwrap() + Money::new(2, "GBP").unwrap();
        assert_eq!(sum.code(), "XXX");
        assert_eq!(sum.amount, dec!(3));
    }

    #[test]
    fn test_add_then_sub_is_exact() {
        let a = usd(dec!(0.1));
        let b = usd(dec!(0.2));
        assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn test_mul_by_scalar() {
        assert_eq!(usd(dec!(2.50)) * 4, usd(dec!(10)));
        assert_eq!(4 * usd(dec!(2.50)), usd(dec!(10)));
        assert_eq!(usd(dec!(2.50)).checked_mul("1.5").unwrap(), usd(dec!(3.75)));
    }

    #[test]
    fn test_mul_money_by_money_fails() {
        let err = usd(dec!(10)).checked_mul(usd(dec!(2))).unwrap_err();
        assert_eq!(
            err,
            MoneyError::InvalidOperation("cannot multiply monetary quantities".into())
        );
    }

    #[test]
    fn test_div_by_scalar() {
        assert_eq!(usd(dec!(10)) / 4, usd(dec!(2.5)));
        assert_eq!(
            usd(dec!(10)).checked_div(4).unwrap(),
            Quotient::Money(usd(dec!(2.5)))
        );
        assert!(matches!(
            usd(dec!(10)).checked_div(0),
            Err(MoneyError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_div_by_money() {
        assert_eq!(
            usd(dec!(10)).checked_div(usd(dec!(4))).unwrap(),
            Quotient::Ratio(dec!(2.5))
        );
        assert_eq!(usd(dec!(3)).ratio(&usd(dec!(12))).unwrap(), dec!(0.25));

        let jpy = Money::new(4, "JPY").unwrap();
        assert_eq!(
            usd(dec!(10)).checked_div(&jpy).unwrap_err(),
            MoneyError::mismatch("USD", "JPY")
        );
        assert!(matches!(
            usd(dec!(10)).ratio(&usd(dec!(0))),
            Err(MoneyError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_percentage() {
        let money = usd(dec!(200));
        assert_eq!(5 % money.clone(), usd(dec!(10)));
        assert_eq!(dec!(12.5) % money.clone(), usd(dec!(25)));
        assert_eq!(money.percentage(5).unwrap(), usd(dec!(10)));
        assert_eq!(money.percentage("0.5").unwrap(), usd(dec!(1)));
    }

    #[test]
    fn test_percentage_chains_into_add() {
        let money = usd(dec!(200));
        let total = money.clone() + 15_i32 % money;
        assert_eq!(total, usd(dec!(230)));

        let bill = usd(dec!(100));
        let tip = 15_i32 % bill.clone();
        assert_eq!((bill + tip).to_string(), "USD 115.00");
    }

    #[test]
    fn test_scalar_minus_money_matches_money_minus_scalar() {
        assert_eq!(5 - usd(dec!(10)), usd(dec!(5)));
        assert_eq!(5_i32 - usd(dec!(10)), usd(dec!(10)) - 5_i32);
        assert_eq!(dec!(0.25) - usd(dec!(1)), usd(dec!(0.75)));
        assert_eq!(3_u64 - usd(dec!(-1)), usd(dec!(-4)));
    }

    #[test]
    fn test_percentage_of_money_fails() {
        let money = usd(dec!(200));
        assert_eq!(
            money.percentage(&money).unwrap_err(),
            MoneyError::InvalidOperation("invalid monetary operation".into())
        );
    }

    #[test]
    fn test_neg() {
        let money = usd(dec!(3.25));
        assert_eq!(-&money, usd(dec!(-3.25)));
        assert_eq!(-money, usd(dec!(-3.25)));
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = usd(Decimal::MAX);
        assert_eq!(
            max.checked_add(1).unwrap_err(),
            MoneyError::InvalidOperation("arithmetic overflow".into())
        );
    }
}
