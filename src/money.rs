//! Currency formatting and amount validation
//!
//! Amounts are decimal currency units (`f64`, e.g. `12.5` dollars). Formatting
//! takes an explicit [`CurrencyFormat`] instead of relying on a process-wide
//! locale.

use crate::error::{BreakdownError, Result};
use serde::{Deserialize, Serialize};

/// Largest supported number of fractional digits
pub const MAX_DECIMALS: u32 = 6;

/// Largest amount accepted anywhere in a breakdown (one trillion units)
///
/// Keeps every amount exactly representable to the cent in an `f64` and the
/// scaled value well inside `u128` for any supported precision.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Symbol, precision and separators used when rendering an amount
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurrencyFormat {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default = "default_decimals")]
    pub decimals: u32,

    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
}

impl CurrencyFormat {
    /// US dollars: `$1,234.50`
    pub fn usd() -> Self {
        Self {
            symbol: default_symbol(),
            decimals: default_decimals(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }

    /// Check the format is usable for rendering
    pub fn validate(&self) -> Result<()> {
        if self.symbol.is_empty() {
            return Err(BreakdownError::Config(
                "Currency symbol cannot be empty".to_string(),
            ));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(BreakdownError::Config(format!(
                "Currency decimals must be at most {}, got {}",
                MAX_DECIMALS, self.decimals
            )));
        }
        if self.decimals > 0 && self.decimal_separator.is_empty() {
            return Err(BreakdownError::Config(
                "Decimal separator cannot be empty".to_string(),
            ));
        }
        if self.thousands_separator == self.decimal_separator {
            return Err(BreakdownError::Config(format!(
                "Thousands and decimal separators must differ (both '{}')",
                self.decimal_separator
            )));
        }
        Ok(())
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::usd()
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> u32 {
    2
}

fn default_thousands_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

/// Reject non-finite, negative and out-of-range amounts
///
/// `field` names the offending input in the returned error.
pub fn validate_amount(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BreakdownError::invalid_amount(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(BreakdownError::invalid_amount(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    if value > MAX_AMOUNT {
        return Err(BreakdownError::invalid_amount(
            field,
            format!("is too large, got {} (maximum {})", value, MAX_AMOUNT),
        ));
    }
    Ok(value)
}

/// Format an amount with the given currency format
///
/// Rounds half away from zero to `format.decimals` places and groups the
/// integer part in threes: `1234.5` -> `"$1,234.50"`.
pub fn format_currency(value: f64, format: &CurrencyFormat) -> Result<String> {
    let value = validate_amount("amount", value)?;
    Ok(format_validated(value, format))
}

fn effective_decimals(format: &CurrencyFormat) -> u32 {
    format.decimals.min(MAX_DECIMALS)
}

/// Scale a validated amount to minor units (cents for USD), rounding half
/// away from zero
pub(crate) fn to_minor_units(value: f64, format: &CurrencyFormat) -> u128 {
    let scale = 10u128.pow(effective_decimals(format));
    (value * scale as f64).round() as u128
}

/// Format an amount already known to be finite, non-negative and at most
/// [`MAX_AMOUNT`]
pub(crate) fn format_validated(value: f64, format: &CurrencyFormat) -> String {
    format_minor_units(to_minor_units(value, format), format)
}

/// Format an amount given in minor units
pub(crate) fn format_minor_units(scaled: u128, format: &CurrencyFormat) -> String {
    let decimals = effective_decimals(format);
    let scale = 10u128.pow(decimals);
    let units = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::with_capacity(format.symbol.len() + 16);
    out.push_str(&format.symbol);
    out.push_str(&group_thousands(units, &format.thousands_separator));
    if decimals > 0 {
        out.push_str(&format.decimal_separator);
        out.push_str(&format!("{:0width$}", fraction, width = decimals as usize));
    }
    out
}

fn group_thousands(units: u128, separator: &str) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(value: f64) -> String {
        format_currency(value, &CurrencyFormat::usd()).unwrap()
    }

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(usd(0.0), "$0.00");
        assert_eq!(usd(5.0), "$5.00");
        assert_eq!(usd(28.0), "$28.00");
        assert_eq!(usd(1234.5), "$1,234.50");
        assert_eq!(usd(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_currency_thousands_grouping() {
        assert_eq!(usd(100.0), "$100.00");
        assert_eq!(usd(1000.0), "$1,000.00");
        assert_eq!(usd(100_000.0), "$100,000.00");
        assert_eq!(usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(usd(12_345_678.9), "$12,345,678.90");
    }

    #[test]
    fn test_format_currency_rounding() {
        assert_eq!(usd(0.125), "$0.13");
        assert_eq!(usd(0.004), "$0.00");
        assert_eq!(usd(22.999_999_999), "$23.00");
    }

    #[test]
    fn test_format_currency_rejects_invalid() {
        let fmt = CurrencyFormat::usd();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.01] {
            let err = format_currency(bad, &fmt).unwrap_err();
            assert_eq!(err.kind(), "invalid_amount");
        }
    }

    #[test]
    fn test_format_currency_rejects_huge_amounts() {
        let fmt = CurrencyFormat::usd();
        for huge in [1e37, 1e300, f64::MAX, MAX_AMOUNT * 2.0] {
            let err = format_currency(huge, &fmt).unwrap_err();
            assert_eq!(err.kind(), "invalid_amount");
            assert!(err.to_string().contains("too large"), "{}", err);
        }
        assert_eq!(usd(MAX_AMOUNT), "$1,000,000,000,000.00");
    }

    #[test]
    fn test_minor_units_round_trip() {
        let fmt = CurrencyFormat::usd();
        assert_eq!(to_minor_units(0.1 + 0.2, &fmt), 30);
        assert_eq!(to_minor_units(0.3, &fmt), 30);
        assert_eq!(format_minor_units(123_450, &fmt), "$1,234.50");
    }

    #[test]
    fn test_validate_amount_names_field() {
        let err = validate_amount("fee", f64::NAN).unwrap_err();
        match err {
            BreakdownError::InvalidAmount { field, .. } => assert_eq!(field, "fee"),
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
        assert_eq!(validate_amount("fee", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_custom_format() {
        let euro = CurrencyFormat {
            symbol: "€".to_string(),
            decimals: 2,
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
        };
        assert_eq!(format_currency(1234.5, &euro).unwrap(), "€1.234,50");

        let yen = CurrencyFormat {
            symbol: "¥".to_string(),
            decimals: 0,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        };
        assert_eq!(format_currency(1234.5, &yen).unwrap(), "¥1,235");
    }

    #[test]
    fn test_currency_format_validation() {
        assert!(CurrencyFormat::usd().validate().is_ok());

        let mut fmt = CurrencyFormat::usd();
        fmt.decimals = 7;
        assert!(fmt.validate().is_err());

        let mut fmt = CurrencyFormat::usd();
        fmt.thousands_separator = ".".to_string();
        let err = fmt.validate().unwrap_err();
        assert!(err.to_string().contains("must differ"));

        let mut fmt = CurrencyFormat::usd();
        fmt.symbol.clear();
        assert!(fmt.validate().is_err());
    }
}
