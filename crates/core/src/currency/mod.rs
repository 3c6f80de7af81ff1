//! Currencies and the registry they live in.

mod context;
mod iso4217;
mod types;

pub use context::CurrencyContext;
pub use types::{Currency, MAX_DECIMAL_PLACES};
