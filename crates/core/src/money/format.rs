//! Text input and output.
//!
//! Input grammar, after trimming:
//!
//! ```text
//! bare  := decimal
//! coded := ALPHA ALPHA ALPHA whitespace* decimal
//! ```
//!
//! A bare amount is in the default currency. Output is `"<CODE> <amount>"`
//! with the amount at the currency's decimal places.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::coerce::parse_decimal;
use super::error::{MoneyError, MoneyResult};
use super::types::Money;
use crate::currency::CurrencyContext;

const CODE_LEN: usize = 3;

/// Recognised shape of a monetary text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyInput {
    /// A plain decimal, to be read in the default currency.
    Bare(Decimal),
    /// A currency code followed by a decimal.
    Coded {
        /// Upper-cased three-letter code, not yet checked against a registry.
        code: String,
        /// The amount.
        amount: Decimal,
    },
}

/// Classifies `input` as a bare or a code-prefixed amount.
///
/// # Errors
///
/// `IncorrectMoneyInput` (carrying the original text) if neither form
/// matches.
pub fn parse_money_input(input: &str) -> MoneyResult<MoneyInput> {
    let trimmed = input.trim();
    if let Ok(amount) = parse_decimal(trimmed) {
        return Ok(MoneyInput::Bare(amount));
    }

    let coded = trimmed
        .get(..CODE_LEN)
        .filter(|code| code.chars().all(|c| c.is_ascii_alphabetic()))
        .and_then(|code| {
            let amount = parse_decimal(&trimmed[CODE_LEN..]).ok()?;
            Some(MoneyInput::Coded {
                code: code.to_ascii_uppercase(),
                amount,
            })
        });

    coded.ok_or_else(|| {
        debug!(input, "Rejected monetary input");
        MoneyError::IncorrectMoneyInput(input.to_string())
    })
}

impl Money {
    /// Parses `"<CODE> <amount>"` or a bare amount (default currency)
    /// against the process-wide registry.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// let money = Money::from_string("USD 5.00").unwrap();
    /// assert_eq!(money.code(), "USD");
    /// assert_eq!(money.amount.to_string(), "5.00");
    /// ```
    pub fn from_string(input: &str) -> MoneyResult<Self> {
        Self::from_string_in(&CurrencyContext::global(), input)
    }

    /// Parses against an explicit registry.
    ///
    /// # Errors
    ///
    /// `IncorrectMoneyInput` for malformed text, `UnknownCurrency` for a
    /// well-formed input naming an unregistered code.
    pub fn from_string_in(ctx: &CurrencyContext, input: &str) -> MoneyResult<Self> {
        match parse_money_input(input)? {
            MoneyInput::Bare(amount) => Ok(Self::from_parts(amount, ctx.default_currency())),
            MoneyInput::Coded { code, amount } => Ok(Self::from_parts(amount, ctx.lookup(&code)?)),
        }
    }

    /// Replaces this value with the one parsed from `input`.
    ///
    /// Left unchanged on error.
    pub fn set_from_str(&mut self, input: &str) -> MoneyResult<()> {
        *self = Self::from_string(input)?;
        Ok(())
    }

    /// Renders as symbol and amount (`$5.00`, `-€1.50`), or like `Display`
    /// when the currency has no symbol.
    #[must_use]
    pub fn format_with_symbol(&self) -> String {
        let symbol = self.currency().symbol();
        if symbol.is_empty() {
            return self.to_string();
        }

        let amount = self.display_amount();
        if amount.is_sign_negative() {
            format!("-{symbol}{}", amount.abs())
        } else {
            format!("{symbol}{amount}")
        }
    }

    /// Amount rounded half-to-even to the currency's places, never `-0`.
    fn display_amount(&self) -> Decimal {
        let places = self.currency().decimal_places();
        let mut amount = self
            .amount
            .round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
        amount.rescale(places);
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        amount
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.display_amount())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}
