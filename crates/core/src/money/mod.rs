//! The `Money` value type.

mod allocation;
mod arithmetic;
mod coerce;
mod compare;
mod error;
mod format;
mod serialize;
mod types;

#[cfg(test)]
mod props;

pub use arithmetic::Quotient;
pub use coerce::{IntoCurrency, IntoOperand, Operand, ToDecimal, parse_decimal};
pub use error::{MoneyError, MoneyResult};
pub use format::{MoneyInput, parse_money_input};
pub use types::Money;
