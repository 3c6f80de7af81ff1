//! Adapter error types.

use moneta_core::MoneyError;
use moneta_shared::AppError;
use thiserror::Error;

/// Result type alias using `ContribError`.
pub type ContribResult<T> = Result<T, ContribError>;

/// Errors raised at the storage and form boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContribError {
    /// Comparison operator a money column cannot answer.
    #[error("Lookup '{0}' is not supported for MoneyField")]
    UnsupportedLookup(String),

    /// Form input failed field validation.
    #[error("Invalid form input: {0}")]
    InvalidFormInput(String),

    /// Failure from the money layer.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl ContribError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLookup(_) => "UNSUPPORTED_LOOKUP",
            Self::InvalidFormInput(_) => "INVALID_FORM_INPUT",
            Self::Money(err) => err.error_code(),
        }
    }
}

impl From<ContribError> for AppError {
    fn from(err: ContribError) -> Self {
        match err {
            ContribError::Money(err) => err.into(),
            other => Self::Validation(other.to_string()),
        }
    }
}
