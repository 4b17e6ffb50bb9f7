//! Bank holiday calendar for a single year

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Demo list of Indian bank holidays for 2025. Dates marked tentative follow
/// the lunar calendar and may shift.
const BUILTIN_HOLIDAYS_2025_IN: [(u32, u32, &str); 11] = [
    (1, 1, "New Year’s Day"),
    (1, 26, "Republic Day"),
    (3, 14, "Holi"),
    (3, 31, "Eid al-Fitr (Tentative)"),
    (4, 14, "Dr. Ambedkar Jayanti"),
    (4, 18, "Good Friday"),
    (5, 1, "Maharashtra Day / Labour Day"),
    (8, 15, "Independence Day"),
    (10, 2, "Gandhi Jayanti"),
    (10, 20, "Diwali (Tentative)"),
    (12, 25, "Christmas Day"),
];

const BUILTIN_COUNTRY: &str = "India";
const BUILTIN_YEAR: i32 = 2025;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub name: String,
}

/// Holidays for one country and year, ordered by date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayCalendar {
    country: String,
    year: i32,
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    pub fn builtin() -> Self {
        let holidays = BUILTIN_HOLIDAYS_2025_IN
            .iter()
            .filter_map(|&(month, day, name)| {
                NaiveDate::from_ymd_opt(BUILTIN_YEAR, month, day).map(|date| Holiday {
                    date,
                    name: name.to_string(),
                })
            })
            .collect();

        Self::new(BUILTIN_COUNTRY, BUILTIN_YEAR, holidays)
    }

    /// Build a calendar, sorting holidays by date
    pub fn new(country: &str, year: i32, mut holidays: Vec<Holiday>) -> Self {
        holidays.sort_by_key(|h| h.date);
        Self {
            country: country.to_string(),
            year,
            holidays,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Holidays on or after `today`. Empty once the calendar year has passed.
    pub fn upcoming(&self, today: NaiveDate) -> &[Holiday] {
        if today.year() > self.year {
            return &[];
        }
        let start = self.holidays.partition_point(|h| h.date < today);
        &self.holidays[start..]
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_builtin_calendar() {
        let cal = HolidayCalendar::builtin();
        assert_eq!(cal.country(), "India");
        assert_eq!(cal.year(), 2025);
        assert_eq!(cal.holidays().len(), 11);
        assert_eq!(cal.holidays()[0].name, "New Year’s Day");
        assert_eq!(cal.holidays()[10].date, date(2025, 12, 25));

        for pair in cal.holidays().windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_upcoming() {
        let cal = HolidayCalendar::builtin();
        let next = cal.upcoming(date(2025, 10, 2));
        assert_eq!(next.len(), 3);
        assert_eq!(next[0].name, "Gandhi Jayanti");

        assert_eq!(cal.upcoming(date(2024, 6, 1)).len(), 11);
        assert!(cal.upcoming(date(2026, 1, 1)).is_empty());
    }

    #[test]
    fn test_new_sorts_by_date() {
        let cal = HolidayCalendar::new(
            "Testland",
            2030,
            vec![
                Holiday { date: date(2030, 5, 1), name: "B".into() },
                Holiday { date: date(2030, 1, 1), name: "A".into() },
            ],
        );
        assert_eq!(cal.holidays()[0].name, "A");
    }

    #[test]
    fn test_holiday_serializes_iso_date() {
        let h = Holiday { date: date(2025, 1, 26), name: "Republic Day".into() };
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"date":"2025-01-26","name":"Republic Day"}"#);
    }
}
