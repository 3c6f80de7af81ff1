//! Subcommand implementations.
//!
//! Each command returns the text to print. Library errors are turned into
//! `AppError` here so `main` can map them to an exit code.

use moneta_core::{Currency, CurrencyContext, Money};
use moneta_shared::{AppError, AppResult};
use serde::Serialize;

#[derive(Serialize)]
struct CurrencyRow<'a> {
    code: &'a str,
    numeric_code: &'a str,
    name: &'a str,
    symbol: &'a str,
    decimal_places: u32,
}

impl<'a> From<&'a Currency> for CurrencyRow<'a> {
    fn from(currency: &'a Currency) -> Self {
        Self {
            code: currency.code(),
            numeric_code: currency.numeric_code(),
            name: currency.name(),
            symbol: currency.symbol(),
            decimal_places: currency.decimal_places(),
        }
    }
}

pub fn currencies(json: bool) -> AppResult<String> {
    let currencies = CurrencyContext::global().currencies();
    let rows: Vec<CurrencyRow<'_>> = currencies.iter().map(|c| CurrencyRow::from(&**c)).collect();

    if json {
        return serde_json::to_string_pretty(&rows).map_err(|e| AppError::Internal(e.to_string()));
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            format!(
                "{}  {}  {}  {:<4} {}",
                row.code, row.numeric_code, row.decimal_places, row.symbol, row.name
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn parse(text: &str) -> AppResult<String> {
    let money = Money::from_string(text)?;
    Ok(money.to_string())
}

pub fn convert(text: &str, code: &str) -> AppResult<String> {
    let money = Money::from_string(text)?;
    let converted = money.convert_to(code)?;
    Ok(format!("{money} = {converted}"))
}

pub fn allocate(text: &str, ratios: &[String]) -> AppResult<String> {
    let money = Money::from_string(text)?;
    let shares = money.allocate(ratios)?;
    let lines: Vec<String> = ratios
        .iter()
        .zip(&shares)
        .map(|(ratio, share)| format!("{ratio}\t{share}"))
        .collect();
    Ok(lines.join("\n"))
}

pub fn country(code: &str) -> AppResult<String> {
    let currency = Currency::by_country(code)?;
    Ok(format!(
        "{}: {} ({})",
        code.to_uppercase(),
        currency.code(),
        currency.name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currencies_table() {
        let output = currencies(false).unwrap();
        assert!(output.lines().any(|line| line.starts_with("USD  840  2")));
        assert!(output.lines().any(|line| line.starts_with("JPY  392  0")));
    }

    #[test]
    fn test_currencies_json() {
        let output = currencies(true).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        let usd = rows.iter().find(|row| row["code"] == "USD").unwrap();
        assert_eq!(usd["numeric_code"], "840");
        assert_eq!(usd["decimal_places"], 2);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("USD 5").unwrap(), "USD 5.00");
        assert_eq!(parse("jpy 1200").unwrap(), "JPY 1200");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let err = parse("nope").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(matches!(parse("QQQ 1"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_convert() {
        // registry rates are left at 1 in this binary
        assert_eq!(convert("EUR 10", "USD").unwrap(), "EUR 10.00 = USD 10.00");
        assert!(matches!(convert("EUR 10", "QQQ"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_allocate() {
        let ratios = vec!["1".to_string(), "1".to_string(), "1".to_string()];
        assert_eq!(
            allocate("USD 100", &ratios).unwrap(),
            "1\tUSD 33.34\n1\tUSD 33.33\n1\tUSD 33.33"
        );

        let ratios = vec!["0".to_string(), "0".to_string()];
        assert!(matches!(
            allocate("USD 100", &ratios),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_country() {
        assert_eq!(country("jp").unwrap(), "JP: JPY (Yen)");
        assert!(matches!(country("ZZ"), Err(AppError::NotFound(_))));
    }
}
