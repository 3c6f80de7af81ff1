//! Money error types.
//!
//! Every failure in this crate is local and synchronous. Nothing is retried;
//! the caller decides whether to default, retry or propagate.

use moneta_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur while building or combining monetary values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Registry Errors ==========
    /// Currency code is not present in the registry.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Country code has no associated currency.
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    /// Exchange rate must be positive.
    #[error("Exchange rate must be positive, got {0}")]
    InvalidExchangeRate(Decimal),

    // ========== Input Errors ==========
    /// Amount is not a valid decimal literal.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Text matches neither the bare-amount nor the code-prefixed form.
    #[error("Incorrectly formatted monetary input: {0:?}")]
    IncorrectMoneyInput(String),

    // ========== Operation Errors ==========
    /// Two monetary values of different currencies were compared or divided.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// Operation has no currency-sound meaning.
    #[error("Invalid monetary operation: {0}")]
    InvalidOperation(String),
}

impl MoneyError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::UnknownCountry(_) => "UNKNOWN_COUNTRY",
            Self::InvalidExchangeRate(_) => "INVALID_EXCHANGE_RATE",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::IncorrectMoneyInput(_) => "INCORRECT_MONEY_INPUT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidOperation(_) => "INVALID_OPERATION",
        }
    }

    pub(crate) fn mismatch(left: &str, right: &str) -> Self {
        Self::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub(crate) fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::UnknownCurrency(_) | MoneyError::UnknownCountry(_) => {
                Self::NotFound(err.to_string())
            }
            MoneyError::InvalidExchangeRate(_)
            | MoneyError::InvalidAmount(_)
            | MoneyError::IncorrectMoneyInput(_)
            | MoneyError::CurrencyMismatch { .. }
            | MoneyError::InvalidOperation(_) => Self::Validation(err.to_string()),
        }
    }
}
