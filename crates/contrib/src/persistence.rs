//! Two-column storage for `Money`.
//!
//! A money field named `price` is stored as a decimal `price` column plus a
//! three-letter `price_currency` column. Reads rebuild the value through the
//! registry, writes split it again. Only order-preserving comparisons on the
//! amount column are allowed in queries.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use moneta_core::{CurrencyContext, Money};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ContribError, ContribResult};

/// Name of the currency column that accompanies the amount column `name`.
#[must_use]
pub fn currency_field_name(name: &str) -> String {
    format!("{name}_currency")
}

/// Comparison a money column can be queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// `=`
    Exact,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
}

impl Lookup {
    /// Every supported lookup.
    pub const ALL: [Self; 5] = [Self::Exact, Self::Lt, Self::Gt, Self::Lte, Self::Gte];

    /// Lookup name as used in query filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Lt => "lt",
            Self::Gt => "gt",
            Self::Lte => "lte",
            Self::Gte => "gte",
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lookup {
    type Err = ContribError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lookup| lookup.as_str() == s)
            .ok_or_else(|| ContribError::UnsupportedLookup(s.to_string()))
    }
}

/// Stored pair of columns backing one money field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoneyColumns {
    /// Amount column.
    pub amount: Option<Decimal>,
    /// Currency code column.
    pub currency: Option<String>,
}

/// A money field split over an amount column and a currency column.
#[derive(Debug, Clone)]
pub struct MoneyField {
    name: String,
    default_currency: Option<String>,
    context: Arc<CurrencyContext>,
}

impl MoneyField {
    /// Creates a field resolving currencies in the process-wide registry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_currency: None,
            context: CurrencyContext::global(),
        }
    }

    /// Sets the currency stored when none is given.
    #[must_use]
    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = Some(code.into().to_uppercase());
        self
    }

    /// Resolves currencies against `context` instead of the global registry.
    #[must_use]
    pub fn with_context(mut self, context: Arc<CurrencyContext>) -> Self {
        self.context = context;
        self
    }

    /// Amount column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currency stored when none is given, if any.
    #[must_use]
    pub fn default_currency(&self) -> Option<&str> {
        self.default_currency.as_deref()
    }

    /// Currency column name, `"<name>_currency"`.
    #[must_use]
    pub fn currency_field_name(&self) -> String {
        currency_field_name(&self.name)
    }

    /// Both column names, amount first.
    #[must_use]
    pub fn column_names(&self) -> [String; 2] {
        [self.name.clone(), self.currency_field_name()]
    }

    /// Columns of a fresh row: no amount, the default currency.
    #[must_use]
    pub fn default_columns(&self) -> MoneyColumns {
        MoneyColumns {
            amount: None,
            currency: self.default_currency.clone(),
        }
    }

    /// Rebuilds the value from its stored columns.
    ///
    /// A missing amount reads as zero. A missing or empty currency falls
    /// back to the field default, then to the registry default.
    pub fn get(&self, columns: &MoneyColumns) -> ContribResult<Money> {
        let code = columns
            .currency
            .as_deref()
            .filter(|code| !code.is_empty())
            .or(self.default_currency.as_deref());

        Ok(Money::new_in(&self.context, columns.amount, code)?)
    }

    /// Splits `value` into the stored columns.
    pub fn set(&self, columns: &mut MoneyColumns, value: &Money) {
        columns.amount = Some(value.amount);
        columns.currency = Some(value.code().to_string());
    }

    /// Reads a submitted value: `"<CODE> <amount>"`, or a bare amount in
    /// the field's default currency.
    pub fn to_value(&self, text: &str) -> ContribResult<Money> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let money = match parts.as_slice() {
            [code, amount] => Money::new_in(&self.context, *amount, *code)?,
            _ => Money::new_in(&self.context, text, self.default_currency.as_deref())?,
        };
        Ok(money)
    }

    /// Validates a query comparison and returns the amount to bind.
    ///
    /// # Errors
    ///
    /// `UnsupportedLookup` naming `op` unless it is one of `exact`, `lt`,
    /// `gt`, `lte`, `gte`.
    pub fn prep_lookup(&self, op: &str, value: &Money) -> ContribResult<(Lookup, Decimal)> {
        let lookup = op.parse::<Lookup>().inspect_err(|_| {
            debug!(field = %self.name, op, "Rejected money lookup");
        })?;
        Ok((lookup, value.amount))
    }
}
