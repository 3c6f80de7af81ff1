//! Behaviour that depends on the process-wide default currency.
//!
//! Kept in a single test so nothing else in this binary observes the
//! default changing.

use moneta_core::{Currency, CurrencyContext, Money, MoneyError};
use rust_decimal_macros::dec;

#[test]
fn test_process_wide_default_currency() {
    // Starts at the sentinel
    assert_eq!(Money::new(5, None::<&str>).unwrap().code(), "XXX");
    assert_eq!(Money::default().code(), "XXX");

    Currency::set_default("EUR").unwrap();
    let money = Money::new(5, None::<&str>).unwrap();
    assert_eq!(money.code(), "EUR");
    assert_eq!(money.amount, dec!(5));

    // Bare text is read in the default, coded text ignores it
    let bare = Money::from_string("5.00").unwrap();
    assert_eq!(bare.code(), "EUR");
    assert_eq!(Money::from_string("USD 5.00").unwrap().code(), "USD");

    // Unknown codes leave the default alone
    assert_eq!(
        Currency::set_default("QQQ").unwrap_err(),
        MoneyError::UnknownCurrency("QQQ".into())
    );
    assert_eq!(CurrencyContext::global().default_currency().code(), "EUR");

    // Mixed-currency sums go through the default using each rate
    Currency::lookup("USD").unwrap().set_exchange_rate("0.9").unwrap();
    Currency::lookup("GBP").unwrap().set_exchange_rate("1.2").unwrap();
    let sum = Money::new(10, "USD").unwrap() + Money::new(10, "GBP").unwrap();
    assert_eq!(sum.code(), "EUR");
    assert_eq!(sum.amount, dec!(21));

    let usd = Money::new(12, "USD").unwrap();
    assert_eq!(usd.convert_to_default().amount, dec!(10.8));
    assert_eq!(usd.convert_to("GBP").unwrap().amount, dec!(9));
}
