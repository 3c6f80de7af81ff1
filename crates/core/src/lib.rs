//! Money values and the currency registry behind them.
//!
//! This crate contains pure value logic with ZERO web or database dependencies.
//! Amounts are fixed-point decimals; floats never take part in arithmetic.
//!
//! # Modules
//!
//! - `currency` - Currency entity, ISO 4217 catalog and the registry context
//! - `money` - The `Money` value type: arithmetic, comparison, allocation,
//!   parsing and formatting
//!
//! # Example
//!
//! ```
//! use moneta_core::Money;
//!
//! let bill = Money::new("100", "USD").unwrap();
//! let tip = 15_i32 % bill.clone();
//! let total = bill + tip;
//! assert_eq!(total.to_string(), "USD 115.00");
//! ```

pub mod currency;
pub mod money;

pub use currency::{Currency, CurrencyContext};
pub use money::{Money, MoneyError, MoneyResult};
