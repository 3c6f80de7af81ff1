//! Form input for `Money`: an amount box next to a currency selector.

use std::sync::Arc;

use moneta_core::money::parse_decimal;
use moneta_core::{CurrencyContext, Money};
use rust_decimal::Decimal;

use crate::error::{ContribError, ContribResult};

const NO_CURRENCY: &str = "XXX";

/// Selector entries `(code, "CODE - Name")`, sorted by code, without the
/// `XXX` sentinel.
#[must_use]
pub fn currency_choices(ctx: &CurrencyContext) -> Vec<(String, String)> {
    ctx.currencies()
        .iter()
        .filter(|currency| currency.code() != NO_CURRENCY)
        .map(|currency| {
            (
                currency.code().to_string(),
                format!("{} - {}", currency.code(), currency.name()),
            )
        })
        .collect()
}

/// Validation rules for a submitted amount and currency pair.
#[derive(Debug, Clone)]
pub struct MoneyFormField {
    decimal_places: u32,
    max_digits: u32,
    choices: Vec<(String, String)>,
    context: Arc<CurrencyContext>,
}

impl MoneyFormField {
    /// Two decimal places, twelve digits, every registered currency.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(CurrencyContext::global())
    }

    /// Same defaults, choices and resolution from `context`.
    #[must_use]
    pub fn with_context(context: Arc<CurrencyContext>) -> Self {
        Self {
            decimal_places: 2,
            max_digits: 12,
            choices: currency_choices(&context),
            context,
        }
    }

    /// Restricts the selector.
    #[must_use]
    pub fn with_choices(mut self, choices: Vec<(String, String)>) -> Self {
        self.choices = choices;
        self
    }

    /// Sets the maximum number of decimal places accepted.
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the maximum number of digits accepted.
    #[must_use]
    pub fn with_max_digits(mut self, max_digits: u32) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Maximum number of decimal places.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Maximum number of digits.
    #[must_use]
    pub fn max_digits(&self) -> u32 {
        self.max_digits
    }

    /// Selector entries.
    #[must_use]
    pub fn choices(&self) -> &[(String, String)] {
        &self.choices
    }

    /// Combines the two submitted inputs into one value.
    ///
    /// Both inputs blank means no value.
    pub fn compress(&self, amount: &str, code: &str) -> ContribResult<Option<Money>> {
        let (amount, code) = (amount.trim(), code.trim());
        if amount.is_empty() && code.is_empty() {
            return Ok(None);
        }
        if amount.is_empty() {
            return Err(ContribError::InvalidFormInput("Enter a number.".into()));
        }

        let amount = parse_decimal(amount)?;
        self.check_digits(amount)?;

        if !self.choices.iter().any(|(choice, _)| choice == code) {
            return Err(ContribError::InvalidFormInput(format!(
                "Select a valid choice. {code} is not one of the available choices."
            )));
        }

        Ok(Some(Money::new_in(&self.context, amount, code)?))
    }

    /// Splits a value back into the two inputs.
    #[must_use]
    pub fn decompress(value: Option<&Money>) -> (Option<Decimal>, Option<String>) {
        value.map_or((None, None), |money| {
            (Some(money.amount), Some(money.code().to_string()))
        })
    }

    fn check_digits(&self, amount: Decimal) -> ContribResult<()> {
        let decimals = amount.scale();
        let significant = amount
            .mantissa()
            .unsigned_abs()
            .checked_ilog10()
            .map_or(1, |log| log + 1);
        let digits = significant.max(decimals);
        let whole_digits = digits - decimals;

        if digits > self.max_digits {
            return Err(ContribError::InvalidFormInput(format!(
                "Ensure that there are no more than {} digits in total.",
                self.max_digits
            )));
        }
        if decimals > self.decimal_places {
            return Err(ContribError::InvalidFormInput(format!(
                "Ensure that there are no more than {} decimal places.",
                self.decimal_places
            )));
        }
        let max_whole = self.max_digits.saturating_sub(self.decimal_places);
        if whole_digits > max_whole {
            return Err(ContribError::InvalidFormInput(format!(
                "Ensure that there are no more than {max_whole} digits before the decimal point."
            )));
        }
        Ok(())
    }
}

impl Default for MoneyFormField {
    fn default() -> Self {
        Self::new()
    }
}
