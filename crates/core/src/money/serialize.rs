//! Serde support.
//!
//! A value is stored as `{"amount": "<decimal>", "currency": "<CODE>"}`. The
//! amount is a string so no precision is lost through JSON numbers.
//! Deserialisation resolves the code against the process-wide registry.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::Money;
use crate::currency::CurrencyContext;

#[derive(Serialize, Deserialize)]
struct MoneyRecord<'a> {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    #[serde(borrow)]
    currency: std::borrow::Cow<'a, str>,
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneyRecord {
            amount: self.amount,
            currency: self.code().into(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = MoneyRecord::deserialize(deserializer)?;
        let currency = CurrencyContext::global()
            .lookup(&record.currency)
            .map_err(D::Error::custom)?;
        Ok(Self::from_parts(record.amount, currency))
    }
}
