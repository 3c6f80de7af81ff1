//! Currency registry and default-currency setting.
//!
//! A `CurrencyContext` owns the catalog (code -> currency), the country
//! lookup table and the default currency. The process-wide instance returned
//! by [`CurrencyContext::global`] backs every API that does not take an
//! explicit context.
//!
//! The default currency sits behind a lock, but reading it and building a
//! value from it are two separate steps. Change the default during startup,
//! before values are constructed concurrently.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use moneta_shared::MoneyConfig;
use once_cell::sync::Lazy;
use tracing::{debug, info};

use super::iso4217::{COUNTRY_CURRENCIES, CURRENCIES, NO_CURRENCY};
use super::types::Currency;
use crate::money::{MoneyError, MoneyResult};

static GLOBAL: Lazy<Arc<CurrencyContext>> = Lazy::new(|| Arc::new(CurrencyContext::new()));

/// Catalog of currencies plus the currency assumed when none is given.
#[derive(Debug)]
pub struct CurrencyContext {
    currencies: HashMap<String, Arc<Currency>>,
    by_country: HashMap<String, Arc<Currency>>,
    default_currency: RwLock<Arc<Currency>>,
}

impl CurrencyContext {
    /// Builds a context holding the full ISO 4217 catalog, with the
    /// `XXX` sentinel as default.
    #[must_use]
    pub fn new() -> Self {
        Self::with_currencies(CURRENCIES.iter().map(|def| {
            Currency::new(def.code)
                .with_numeric_code(def.numeric)
                .with_name(def.name)
                .with_symbol(def.symbol)
                .with_decimal_places(def.decimals)
                .with_countries(def.countries.iter().copied())
        }))
    }

    /// Builds a context from a custom catalog.
    ///
    /// The `XXX` sentinel is added when missing. Country entries whose
    /// currency is not in the catalog are skipped.
    #[must_use]
    pub fn with_currencies(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let mut catalog: HashMap<String, Arc<Currency>> = currencies
            .into_iter()
            .map(|currency| (currency.code().to_string(), Arc::new(currency)))
            .collect();
        let sentinel = Arc::clone(
            catalog
                .entry(NO_CURRENCY.to_string())
                .or_insert_with(|| Arc::new(Currency::new(NO_CURRENCY).with_name("No currency"))),
        );

        let by_country = COUNTRY_CURRENCIES
            .iter()
            .filter_map(|(country, code)| {
                catalog
                    .get(*code)
                    .map(|currency| ((*country).to_string(), Arc::clone(currency)))
            })
            .collect();

        Self {
            currencies: catalog,
            by_country,
            default_currency: RwLock::new(sentinel),
        }
    }

    /// Returns the process-wide context.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Looks up a currency by code (case-insensitive).
    pub fn lookup(&self, code: &str) -> MoneyResult<Arc<Currency>> {
        let code = code.to_uppercase();
        self.currencies
            .get(&code)
            .cloned()
            .ok_or(MoneyError::UnknownCurrency(code))
    }

    /// Returns true if the code is registered (case-insensitive).
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(&code.to_uppercase())
    }

    /// Returns the current default currency.
    #[must_use]
    pub fn default_currency(&self) -> Arc<Currency> {
        Arc::clone(
            &self
                .default_currency
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Replaces the default currency.
    ///
    /// Affects every later currency-less construction and every later
    /// cross-currency conversion made through this context.
    pub fn set_default(&self, code: &str) -> MoneyResult<()> {
        let currency = self.lookup(code)?;
        let mut default = self
            .default_currency
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        info!(from = %default.code(), to = %currency.code(), "Default currency changed");
        *default = currency;
        Ok(())
    }

    /// Returns the `XXX` "no currency" sentinel.
    #[must_use]
    pub fn no_currency(&self) -> Arc<Currency> {
        // with_currencies always registers the sentinel
        self.currencies
            .get(NO_CURRENCY)
            .cloned()
            .unwrap_or_else(|| Arc::new(Currency::new(NO_CURRENCY)))
    }

    /// Looks up the currency used by an ISO 3166 alpha-2 country code.
    pub fn by_country(&self, country_code: &str) -> MoneyResult<Arc<Currency>> {
        let country_code = country_code.to_uppercase();
        self.by_country
            .get(&country_code)
            .cloned()
            .ok_or(MoneyError::UnknownCountry(country_code))
    }

    /// Returns every registered currency, sorted by code.
    #[must_use]
    pub fn currencies(&self) -> Vec<Arc<Currency>> {
        let mut all: Vec<_> = self.currencies.values().cloned().collect();
        all.sort_by(|a, b| a.code().cmp(b.code()));
        all
    }

    /// Applies startup configuration: exchange rates first, then the default.
    ///
    /// Nothing is changed for a rate entry that fails; entries applied before
    /// the failure stay applied.
    pub fn apply_config(&self, config: &MoneyConfig) -> MoneyResult<()> {
        let mut rates: Vec<_> = config.exchange_rates.iter().collect();
        rates.sort();
        for (code, rate) in rates {
            self.lookup(code)?.set_exchange_rate(rate.as_str())?;
        }
        debug!(rates = config.exchange_rates.len(), "Exchange rates applied");

        self.set_default(&config.default_currency)
    }
}

impl Default for CurrencyContext {
    fn default() -> Self {
        Self::new()
    }
}
