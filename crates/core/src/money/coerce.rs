//! Coercion of loosely-typed inputs into amounts, currencies and operands.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::{MoneyError, MoneyResult};
use super::types::Money;
use crate::currency::{Currency, CurrencyContext};

/// Conversion of an amount-like input into a [`Decimal`].
///
/// Integers and decimals convert exactly. Floats go through their shortest
/// decimal text, so `0.1_f64` becomes `0.1`, not the binary expansion.
/// Strings may use plain or scientific notation. `None` is zero.
pub trait ToDecimal {
    /// Performs the conversion.
    fn to_decimal(self) -> MoneyResult<Decimal>;
}

impl ToDecimal for Decimal {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        Ok(self)
    }
}

impl ToDecimal for &Decimal {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        Ok(*self)
    }
}

macro_rules! int_to_decimal {
    ($($ty:ty),*) => {
        $(
            impl ToDecimal for $ty {
                fn to_decimal(self) -> MoneyResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

int_to_decimal!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToDecimal for i128 {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        Decimal::try_from_i128_with_scale(self, 0)
            .map_err(|_| MoneyError::InvalidAmount(self.to_string()))
    }
}

impl ToDecimal for f64 {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        if !self.is_finite() {
            return Err(MoneyError::InvalidAmount(self.to_string()));
        }
        parse_decimal(&self.to_string())
    }
}

impl ToDecimal for f32 {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        if !self.is_finite() {
            return Err(MoneyError::InvalidAmount(self.to_string()));
        }
        parse_decimal(&self.to_string())
    }
}

impl ToDecimal for &str {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        parse_decimal(self)
    }
}

impl ToDecimal for String {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        parse_decimal(&self)
    }
}

impl ToDecimal for &String {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        parse_decimal(self)
    }
}

impl<T: ToDecimal> ToDecimal for Option<T> {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        self.map_or(Ok(Decimal::ZERO), ToDecimal::to_decimal)
    }
}

/// Parses a decimal literal, accepting surrounding whitespace and
/// scientific notation (`1.5e3`).
pub fn parse_decimal(input: &str) -> MoneyResult<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MoneyError::InvalidAmount(input.to_string()));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MoneyError::InvalidAmount(input.to_string()))
}

/// Resolution of a currency argument against a registry.
///
/// `None` and the empty string resolve to the context's default currency.
pub trait IntoCurrency {
    /// Resolves the currency.
    fn resolve(self, ctx: &CurrencyContext) -> MoneyResult<Arc<Currency>>;
}

impl IntoCurrency for Arc<Currency> {
    fn resolve(self, _ctx: &CurrencyContext) -> MoneyResult<Arc<Currency>> {
        Ok(self)
    }
}

impl IntoCurrency for &Arc<Currency> {
    fn resolve(self, _ctx: &CurrencyContext) -> MoneyResult<Arc<Currency>> {
        Ok(Arc::clone(self))
    }
}

impl IntoCurrency for &str {
    fn resolve(self, ctx: &CurrencyContext) -> MoneyResult<Arc<Currency>> {
        if self.is_empty() {
            Ok(ctx.default_currency())
        } else {
            ctx.lookup(self)
        }
    }
}

impl IntoCurrency for String {
    fn resolve(self, ctx: &CurrencyContext) -> MoneyResult<Arc<Currency>> {
        self.as_str().resolve(ctx)
    }
}

impl IntoCurrency for &String {
    fn resolve(self, ctx: &CurrencyContext) -> MoneyResult<Arc<Currency>> {
        self.as_str().resolve(ctx)
    }
}

impl<T: IntoCurrency> IntoCurrency for Option<T> {
    fn resolve(self, ctx: &CurrencyContext) -> MoneyResult<Arc<Currency>> {
        match self {
            Some(currency) => currency.resolve(ctx),
            None => Ok(ctx.default_currency()),
        }
    }
}

/// Right-hand side of a monetary operation: another value or a plain number.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Another monetary value.
    Money(Money),
    /// A dimensionless number.
    Scalar(Decimal),
}

/// Conversion into an [`Operand`].
pub trait IntoOperand {
    /// Performs the conversion.
    fn into_operand(self) -> MoneyResult<Operand>;
}

impl IntoOperand for Operand {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(self)
    }
}

impl IntoOperand for Money {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(Operand::Money(self))
    }
}

impl IntoOperand for &Money {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(Operand::Money(self.clone()))
    }
}

macro_rules! scalar_operand {
    ($($ty:ty),*) => {
        $(
            impl IntoOperand for $ty {
                fn into_operand(self) -> MoneyResult<Operand> {
                    self.to_decimal().map(Operand::Scalar)
                }
            }
        )*
    };
}

scalar_operand!(
    Decimal, &Decimal, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64, &str,
    String, &String
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("5", dec!(5))]
    #[case("5.00", dec!(5.00))]
    #[case(" -12.345 ", dec!(-12.345))]
    #[case("+7.5", dec!(7.5))]
    #[case("1.5e3", dec!(1500))]
    #[case("2e-2", dec!(0.02))]
    fn test_parse_decimal(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_decimal(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("USD 5")]
    #[case("1.2.3")]
    fn test_parse_decimal_invalid(#[case] input: &str) {
        assert_eq!(
            parse_decimal(input).unwrap_err(),
            MoneyError::InvalidAmount(input.to_string())
        );
    }

    #[test]
    fn test_integers_and_floats() {
        assert_eq!(42_i32.to_decimal().unwrap(), dec!(42));
        assert_eq!(42_u64.to_decimal().unwrap(), dec!(42));
        assert_eq!((-3_i128).to_decimal().unwrap(), dec!(-3));
        assert_eq!(0.1_f64.to_decimal().unwrap(), dec!(0.1));
        assert_eq!(2.5_f32.to_decimal().unwrap(), dec!(2.5));
        assert!(f64::NAN.to_decimal().is_err());
        assert!(f64::INFINITY.to_decimal().is_err());
    }

    #[test]
    fn test_none_is_zero() {
        assert_eq!(None::<&str>.to_decimal().unwrap(), Decimal::ZERO);
        assert_eq!(Some("3.50").to_decimal().unwrap(), dec!(3.50));
    }

    #[test]
    fn test_resolve_currency() {
        let ctx = CurrencyContext::new();
        assert_eq!("jpy".resolve(&ctx).unwrap().code(), "JPY");
        assert_eq!("".resolve(&ctx).unwrap().code(), "XXX");
        assert_eq!(None::<&str>.resolve(&ctx).unwrap().code(), "XXX");
        assert_eq!(Some("EUR").resolve(&ctx).unwrap().code(), "EUR");
        assert!(matches!(
            "QQQ".resolve(&ctx),
            Err(MoneyError::UnknownCurrency(_))
        ));

        ctx.set_default("GBP").unwrap();
        assert_eq!(None::<String>.resolve(&ctx).unwrap().code(), "GBP");
    }

    #[test]
    fn test_into_operand() {
        assert_eq!(5_i32.into_operand().unwrap(), Operand::Scalar(dec!(5)));
        assert_eq!("1.25".into_operand().unwrap(), Operand::Scalar(dec!(1.25)));
        assert!("x".into_operand().is_err());
    }
}
