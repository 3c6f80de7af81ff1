//! Boundary adapters for `Money` fields.
//!
//! This crate provides:
//! - A two-column persistence adapter (amount + currency code) with the
//!   comparison lookups a money column supports
//! - A form adapter pairing an amount input with a currency selector

pub mod error;
pub mod forms;
pub mod persistence;

pub use error::{ContribError, ContribResult};
pub use forms::{MoneyFormField, currency_choices};
pub use persistence::{Lookup, MoneyColumns, MoneyField, currency_field_name};
