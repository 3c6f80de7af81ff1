//! The `Money` value type: construction and currency conversion.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`; floats are only accepted as input
//! and go through their decimal text.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use super::coerce::{IntoCurrency, ToDecimal};
use super::error::{MoneyError, MoneyResult};
use crate::currency::{Currency, CurrencyContext};

/// A monetary amount bound to a currency.
///
/// Every operation returns a new value. The currency is shared with the
/// registry it came from, so exchange-rate updates are seen by existing
/// values.
#[derive(Debug, Clone)]
pub struct Money {
    /// The amount, in major units (`5.25` is five dollars and a quarter).
    ///
    /// Public so storage and form integrations can assign it directly.
    pub amount: Decimal,
    currency: Arc<Currency>,
}

impl Money {
    /// Creates a value using the process-wide registry.
    ///
    /// `amount` accepts decimals, integers, floats, decimal strings and
    /// `Option`s of those (`None` is zero). `currency` accepts a code, a
    /// registered currency or `None` (the current default).
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// let price = Money::new("19.99", "usd").unwrap();
    /// assert_eq!(price.to_string(), "USD 19.99");
    /// ```
    pub fn new(amount: impl ToDecimal, currency: impl IntoCurrency) -> MoneyResult<Self> {
        Self::new_in(&CurrencyContext::global(), amount, currency)
    }

    /// Creates a value resolving the currency against an explicit context.
    pub fn new_in(
        ctx: &CurrencyContext,
        amount: impl ToDecimal,
        currency: impl IntoCurrency,
    ) -> MoneyResult<Self> {
        let amount = amount.to_decimal()?;
        let currency = currency.resolve(ctx)?;
        Ok(Self { amount, currency })
    }

    /// Creates a value from parts that are already resolved.
    #[must_use]
    pub fn from_parts(amount: Decimal, currency: Arc<Currency>) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Arc<Currency>) -> Self {
        Self::from_parts(Decimal::ZERO, currency)
    }

    /// The currency of this value.
    #[must_use]
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Shorthand for `self.currency().code()`.
    #[must_use]
    pub fn code(&self) -> &str {
        self.currency.code()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Unary plus: a copy with the same amount and currency.
    #[must_use]
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Absolute value, same currency.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_amount(self.amount.abs())
    }

    /// Lossy floating-point view of the amount, for display or charting only.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.amount.to_f64()
    }

    /// Converts into the process-wide default currency.
    ///
    /// # Panics
    ///
    /// Panics if `amount * exchange_rate` overflows the decimal range.
    #[must_use]
    pub fn convert_to_default(&self) -> Self {
        self.convert_to_default_in(&CurrencyContext::global())
    }

    /// Converts into the default currency of `ctx`:
    /// `amount * currency.exchange_rate`.
    ///
    /// # Panics
    ///
    /// Panics if `amount * exchange_rate` overflows the decimal range.
    #[must_use]
    pub fn convert_to_default_in(&self, ctx: &CurrencyContext) -> Self {
        let target = ctx.default_currency();
        Self::from_parts(self.amount * self.currency.exchange_rate(), target)
    }

    /// Converts into another currency of the process-wide registry.
    pub fn convert_to(&self, target: impl IntoCurrency) -> MoneyResult<Self> {
        self.convert_to_in(&CurrencyContext::global(), target)
    }

    /// Converts into another currency, going through the default currency:
    /// `amount * source.rate / target.rate`.
    ///
    /// Rates are only modelled relative to the default currency, so there is
    /// no direct pairwise table.
    pub fn convert_to_in(
        &self,
        ctx: &CurrencyContext,
        target: impl IntoCurrency,
    ) -> MoneyResult<Self> {
        let target = target.resolve(ctx)?;
        if *self.currency == *target {
            return Ok(Self::from_parts(self.amount, target));
        }

        let source_rate = self.currency.exchange_rate();
        let target_rate = target.exchange_rate();
        let amount = self
            .amount
            .checked_mul(source_rate)
            .and_then(|base| base.checked_div(target_rate))
            .ok_or_else(|| MoneyError::invalid_operation("conversion overflow"))?;

        debug!(
            from = %self.currency.code(),
            to = %target.code(),
            %source_rate,
            %target_rate,
            "Converted amount"
        );
        Ok(Self::from_parts(amount, target))
    }

    /// Overflow-checked `convert_to_default_in` against an already-read target.
    pub(crate) fn checked_convert_into(&self, target: &Arc<Currency>) -> MoneyResult<Self> {
        let amount = self
            .amount
            .checked_mul(self.currency.exchange_rate())
            .ok_or_else(|| MoneyError::invalid_operation("conversion overflow"))?;
        Ok(Self::from_parts(amount, Arc::clone(target)))
    }

    pub(crate) fn with_amount(&self, amount: Decimal) -> Self {
        Self::from_parts(amount, Arc::clone(&self.currency))
    }

    pub(crate) fn same_currency(&self, other: &Self) -> bool {
        *self.currency == *other.currency
    }
}

/// Zero in the process-wide default currency.
impl Default for Money {
    fn default() -> Self {
        Self::zero(CurrencyContext::global().default_currency())
    }
}
