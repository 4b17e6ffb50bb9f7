//! Static currency rate table

use std::collections::BTreeMap;

use serde::Serialize;

/// Currency every rate in the built-in table is quoted against
pub const BASE_CURRENCY: &str = "USD";

/// Demo rates: units of each currency per 1 USD. Not live market data.
const BUILTIN_RATES: [(&str, f64); 7] = [
    ("INR", 84.0),
    ("USD", 1.0),
    ("EUR", 0.91),
    ("GBP", 0.76),
    ("JPY", 155.0),
    ("AUD", 1.45),
    ("CAD", 1.34),
];

/// Currency code -> units per one unit of the base currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    base: String,
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// The built-in 7-currency demo table quoted against USD
    pub fn builtin() -> Self {
        Self::from_pairs(BASE_CURRENCY, BUILTIN_RATES.iter().map(|&(c, r)| (c.to_string(), r)))
    }

    /// Build a table from `(code, rate)` pairs. Codes are stored uppercase.
    pub fn from_pairs<I>(base: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            base: normalize_code(base),
            rates: pairs
                .into_iter()
                .map(|(code, rate)| (normalize_code(&code), rate))
                .collect(),
        }
    }

    /// Rate for a code (case-insensitive)
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(&normalize_code(code)).copied()
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Supported codes in alphabetical order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Trim and uppercase a currency code
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
