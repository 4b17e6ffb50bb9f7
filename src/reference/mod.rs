//! Read-only reference data: currency rate table and bank holiday calendar
//!
//! Built once at startup (embedded defaults or CSV files) and shared
//! immutably afterwards. There is no API for changing it at runtime.

mod rates;
mod holidays;
pub mod loader;

pub use rates::{normalize_code, RateTable, BASE_CURRENCY};
pub use holidays::{Holiday, HolidayCalendar};

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid rate {rate} for currency {code}")]
    InvalidRate { code: String, rate: f64 },

    #[error("holiday calendar spans several years: expected {expected}, found {found}")]
    MixedYears { expected: i32, found: i32 },

    #[error("no rows in {0}")]
    Empty(String),
}

/// Container for all static reference data
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub rates: RateTable,
    pub holidays: HolidayCalendar,
}

impl ReferenceData {
    /// Embedded demo data: 7 USD-based rates and India's 2025 bank holidays
    pub fn builtin() -> Self {
        Self {
            rates: RateTable::builtin(),
            holidays: HolidayCalendar::builtin(),
        }
    }

    /// Load reference data from CSV files in a directory
    pub fn from_csv_path(dir: &Path) -> Result<Self, ReferenceDataError> {
        let (rates, holidays) = loader::load_dir(dir)?;
        Ok(Self { rates, holidays })
    }

    /// Load from `dir` when given, otherwise use the built-in data
    pub fn load(dir: Option<&Path>) -> Result<Self, ReferenceDataError> {
        match dir {
            Some(dir) => Self::from_csv_path(dir),
            None => Ok(Self::builtin()),
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
