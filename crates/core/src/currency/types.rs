//! Currency entity.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use tracing::info;

use super::context::CurrencyContext;
use crate::money::{MoneyError, MoneyResult, ToDecimal};

/// Largest number of decimal places the decimal type can represent.
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Immutable descriptor of a monetary unit.
///
/// The code is the identity. The exchange rate is the only mutable field and
/// is shared by every `Money` holding this currency, so updating it affects
/// all later conversions.
#[derive(Debug)]
pub struct Currency {
    code: String,
    numeric_code: String,
    name: String,
    symbol: String,
    decimal_places: u32,
    countries: Vec<String>,
    exchange_rate: RwLock<Decimal>,
}

impl Currency {
    /// Creates a currency with the given code and default metadata
    /// (numeric code `999`, no name or symbol, 2 decimal places, rate 1).
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into().to_uppercase(),
            numeric_code: "999".to_string(),
            name: String::new(),
            symbol: String::new(),
            decimal_places: 2,
            countries: Vec::new(),
            exchange_rate: RwLock::new(Decimal::ONE),
        }
    }

    /// Sets the ISO numeric code.
    #[must_use]
    pub fn with_numeric_code(mut self, numeric_code: impl Into<String>) -> Self {
        self.numeric_code = numeric_code.into();
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Sets the number of minor-unit decimal places (capped at 28).
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
        self
    }

    /// Sets the informational list of countries using this currency.
    #[must_use]
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Three-letter ISO 4217 code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// ISO 4217 numeric code.
    #[must_use]
    pub fn numeric_code(&self) -> &str {
        &self.numeric_code
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display symbol, possibly empty.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of decimal places of the minor unit.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Countries using this currency (informational only).
    #[must_use]
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Smallest representable increment, e.g. `0.01` for two decimal places.
    #[must_use]
    pub fn minimum_unit(&self) -> Decimal {
        Decimal::new(1, self.decimal_places)
    }

    /// Current exchange rate relative to the default currency.
    #[must_use]
    pub fn exchange_rate(&self) -> Decimal {
        *self
            .exchange_rate
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the exchange rate, coercing the input to a decimal.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if the input is not a decimal literal,
    /// `InvalidExchangeRate` if it is zero or negative.
    pub fn set_exchange_rate(&self, rate: impl ToDecimal) -> MoneyResult<()> {
        let rate = rate.to_decimal()?;
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidExchangeRate(rate));
        }

        *self
            .exchange_rate
            .write()
            .unwrap_or_else(PoisonError::into_inner) = rate;
        info!(currency = %self.code, %rate, "Exchange rate updated");
        Ok(())
    }

    /// Looks up a currency in the process-wide registry.
    pub fn lookup(code: &str) -> MoneyResult<Arc<Self>> {
        CurrencyContext::global().lookup(code)
    }

    /// Changes the process-wide default currency.
    pub fn set_default(code: &str) -> MoneyResult<()> {
        CurrencyContext::global().set_default(code)
    }

    /// Looks up the currency of an ISO 3166 alpha-2 country code in the
    /// process-wide registry.
    pub fn by_country(country_code: &str) -> MoneyResult<Arc<Self>> {
        CurrencyContext::global().by_country(country_code)
    }
}

/// Empty codes are never equal, not even to each other.
impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        !self.code.is_empty() && self.code == other.code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}
