//! CSV-based reference data loader
//!
//! Loads rate tables and holiday calendars from a directory:
//! - `currency_rates.csv` with columns `code,rate` (rates per 1 USD)
//! - `bank_holidays.csv` with columns `country,date,name` (dates `YYYY-MM-DD`)

use std::fs::File;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use log::{info, warn};

use super::holidays::{Holiday, HolidayCalendar};
use super::rates::{RateTable, BASE_CURRENCY};
use super::ReferenceDataError;

/// Reference data shipped with the repository
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference";

pub const RATES_FILE: &str = "currency_rates.csv";
pub const HOLIDAYS_FILE: &str = "bank_holidays.csv";

#[derive(Debug, serde::Deserialize)]
struct RateRow {
    code: String,
    rate: f64,
}

#[derive(Debug, serde::Deserialize)]
struct HolidayRow {
    country: String,
    date: String,
    name: String,
}

/// Load a rate table. Every rate must be finite and positive.
pub fn load_rates(path: &Path) -> Result<RateTable, ReferenceDataError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut pairs = Vec::new();
    for result in reader.deserialize() {
        let row: RateRow = result?;
        if !row.rate.is_finite() || row.rate <= 0.0 {
            return Err(ReferenceDataError::InvalidRate {
                code: row.code,
                rate: row.rate,
            });
        }
        pairs.push((row.code, row.rate));
    }

    if pairs.is_empty() {
        return Err(ReferenceDataError::Empty(path.display().to_string()));
    }

    Ok(RateTable::from_pairs(BASE_CURRENCY, pairs))
}

/// Load a holiday calendar. All dates must fall in the same year.
pub fn load_holidays(path: &Path) -> Result<HolidayCalendar, ReferenceDataError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut country = None;
    let mut year = None;
    let mut holidays = Vec::new();

    for result in reader.deserialize() {
        let row: HolidayRow = result?;
        let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d").map_err(|source| {
            ReferenceDataError::InvalidDate {
                value: row.date.clone(),
                source,
            }
        })?;

        let expected_year = *year.get_or_insert(date.year());
        if date.year() != expected_year {
            return Err(ReferenceDataError::MixedYears {
                expected: expected_year,
                found: date.year(),
            });
        }
        country.get_or_insert(row.country);

        holidays.push(Holiday {
            date,
            name: row.name,
        });
    }

    match (country, year) {
        (Some(country), Some(year)) => Ok(HolidayCalendar::new(&country, year, holidays)),
        _ => Err(ReferenceDataError::Empty(path.display().to_string())),
    }
}

/// Load whichever reference files exist in `dir`, falling back to the
/// built-in data for the others
pub fn load_dir(dir: &Path) -> Result<(RateTable, HolidayCalendar), ReferenceDataError> {
    let rates_path = dir.join(RATES_FILE);
    let rates = if rates_path.exists() {
        let table = load_rates(&rates_path)?;
        info!("loaded {} currency rates from {}", table.len(), rates_path.display());
        table
    } else {
        warn!("{} not found, using built-in rates", rates_path.display());
        RateTable::builtin()
    };

    let holidays_path = dir.join(HOLIDAYS_FILE);
    let holidays = if holidays_path.exists() {
        let calendar = load_holidays(&holidays_path)?;
        info!(
            "loaded {} holidays for {} {} from {}",
            calendar.holidays().len(),
            calendar.country(),
            calendar.year(),
            holidays_path.display()
        );
        calendar
    } else {
        warn!("{} not found, using built-in holidays", holidays_path.display());
        HolidayCalendar::builtin()
    };

    Ok((rates, holidays))
}
