use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::LeapDayPolicy;
use crate::errors::{CalculatorError, Result};

/// accepted input format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| CalculatorError::InvalidDate {
        input: input.to_string(),
        message: e.to_string(),
    })
}

/// whole calendar days from `start` to `end`, negative if `end` is earlier
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// same month and day `years` later
///
/// Feb 29 has no counterpart in a non-leap year; `policy` decides where it lands.
pub fn add_years(date: NaiveDate, years: u32, policy: LeapDayPolicy) -> Result<NaiveDate> {
    let year = i32::try_from(years)
        .ok()
        .and_then(|y| date.year().checked_add(y))
        .ok_or_else(|| CalculatorError::overflow("year"))?;

    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| match policy {
            LeapDayPolicy::ClampToFeb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::RollToMar1 => NaiveDate::from_ymd_opt(year, 3, 1),
        })
        .ok_or_else(|| CalculatorError::CalculationError {
            message: format!("{} plus {} years is not a representable date", date, years),
        })
}

/// an ordered pair of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// rejects a range whose end falls before its start
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(CalculatorError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// parse both ends from `YYYY-MM-DD` strings
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// day count, never negative
    pub fn days(&self) -> i64 {
        days_between(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between_uses_real_calendar() {
        assert_eq!(days_between(date(2023, 1, 1), date(2023, 1, 31)), 30);
        assert_eq!(days_between(date(2023, 1, 1), date(2024, 1, 1)), 365);
        assert_eq!(days_between(date(2024, 1, 1), date(2025, 1, 1)), 366);
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_between(date(2023, 2, 28), date(2023, 3, 1)), 1);
        assert_eq!(days_between(date(2023, 3, 1), date(2023, 2, 28)), -1);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2023-01-31").unwrap(), date(2023, 1, 31));
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
        assert!(matches!(parse_date("2023-02-29"), Err(CalculatorError::InvalidDate { .. })));
        assert!(matches!(parse_date("31/01/2023"), Err(CalculatorError::InvalidDate { .. })));
        assert!(matches!(parse_date(""), Err(CalculatorError::InvalidDate { .. })));
    }

    #[test]
    fn test_span_rejects_reversed_range() {
        let err = DateSpan::parse("2023-02-01", "2023-01-01").unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidRange {
                start: date(2023, 2, 1),
                end: date(2023, 1, 1),
            }
        );
    }

    #[test]
    fn test_span_same_day() {
        let span = DateSpan::parse("2023-05-05", "2023-05-05").unwrap();
        assert_eq!(span.days(), 0);
    }

    #[test]
    fn test_span_reports_invalid_date_first() {
        let err = DateSpan::parse("2023-13-01", "2022-01-01").unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidDate { ref input, .. } if input == "2023-13-01"));
    }

    #[test]
    fn test_add_years() {
        let clamp = LeapDayPolicy::ClampToFeb28;
        let roll = LeapDayPolicy::RollToMar1;

        assert_eq!(add_years(date(2023, 1, 1), 1, clamp).unwrap(), date(2024, 1, 1));
        assert_eq!(add_years(date(2023, 8, 31), 2, clamp).unwrap(), date(2025, 8, 31));

        assert_eq!(add_years(date(2024, 2, 29), 1, clamp).unwrap(), date(2025, 2, 28));
        assert_eq!(add_years(date(2024, 2, 29), 1, roll).unwrap(), date(2025, 3, 1));
        assert_eq!(add_years(date(2024, 2, 29), 4, clamp).unwrap(), date(2028, 2, 29));
    }
}
