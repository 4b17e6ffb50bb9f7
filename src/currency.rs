//! Currency converter over the static rate table

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::reference::{normalize_code, RateTable};
use crate::rounding::round4;

/// Where the conversion rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    #[serde(rename = "Custom rate")]
    Custom,
    #[serde(rename = "Static demo rates")]
    StaticTable,
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSource::Custom => "Custom rate",
            RateSource::StaticTable => "Static demo rates",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyResult {
    /// Converted amount, rounded to 4 decimals
    pub converted: f64,
    /// Units of the target currency per unit of the source currency
    pub rate_used: f64,
    pub note: RateSource,
}

/// Convert `amount` from one currency to another
///
/// A `custom_rate` (units of `to` per unit of `from`) bypasses the table
/// entirely. Otherwise both codes must be in `table` and the conversion goes
/// through the table's base currency.
pub fn convert_currency(
    table: &RateTable,
    amount: f64,
    from: &str,
    to: &str,
    custom_rate: Option<f64>,
) -> Result<CurrencyResult, CalcError> {
    if let Some(rate) = custom_rate {
        return Ok(CurrencyResult {
            converted: round4(amount * rate),
            rate_used: rate,
            note: RateSource::Custom,
        });
    }

    let from = normalize_code(from);
    let to = normalize_code(to);

    let (from_rate, to_rate) = match (table.rate(&from), table.rate(&to)) {
        (Some(f), Some(t)) => (f, t),
        _ => {
            warn!("unsupported currency pair {} -> {}", from, to);
            return Err(CalcError::UnsupportedCurrency { from, to });
        }
    };

    let amount_in_base = amount / from_rate;
    let converted = amount_in_base * to_rate;

    debug!("convert {} {} -> {} {}", amount, from, converted, to);

    Ok(CurrencyResult {
        converted: round4(converted),
        rate_used: to_rate / from_rate,
        note: RateSource::StaticTable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_usd_to_inr() {
        let table = RateTable::builtin();
        let r = convert_currency(&table, 100.0, "USD", "INR", None).unwrap();
        assert_eq!(r.converted, 8400.0);
        assert_eq!(r.rate_used, 84.0);
        assert_eq!(r.note, RateSource::StaticTable);
    }

    #[test]
    fn test_cross_rate_via_base() {
        let table = RateTable::builtin();
        let r = convert_currency(&table, 1000.0, "inr", "eur", None).unwrap();
        assert_eq!(r.converted, 10.8333);
        assert_relative_eq!(r.rate_used, 0.91 / 84.0);
    }

    #[test]
    fn test_same_currency_is_identity() {
        let table = RateTable::builtin();
        for code in ["USD", "EUR", "JPY", "inr"] {
            let r = convert_currency(&table, 1234.5678, code, code, None).unwrap();
            assert_eq!(r.converted, 1234.5678);
            assert_eq!(r.rate_used, 1.0);
        }
    }

    #[test]
    fn test_custom_rate_skips_table() {
        let table = RateTable::builtin();
        let r = convert_currency(&table, 50.0, "XYZ", "ABC", Some(2.5)).unwrap();
        assert_eq!(r.converted, 125.0);
        assert_eq!(r.rate_used, 2.5);
        assert_eq!(r.note, RateSource::Custom);
    }

    #[test]
    fn test_unsupported_currency() {
        let table = RateTable::builtin();
        let err = convert_currency(&table, 10.0, "usd", "xyz", None).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnsupportedCurrency {
                from: "USD".to_string(),
                to: "XYZ".to_string()
            }
        );
        assert!(convert_currency(&table, 10.0, "ABC", "USD", None).is_err());
    }

    #[test]
    fn test_note_wire_format() {
        let json = serde_json::to_value(RateSource::StaticTable).unwrap();
        assert_eq!(json, "Static demo rates");
        let json = serde_json::to_value(RateSource::Custom).unwrap();
        assert_eq!(json, "Custom rate");
    }
}
