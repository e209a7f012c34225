//! Calendar month key (`YYYY-MM`) used to bucket rent payments.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A calendar month. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) || !(1..=9999).contains(&year) {
            return Err(DomainError::InvalidYearMonth(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`. Years outside `0001..=9999` have no `YYYY-MM` key.
    pub fn from_date(date: NaiveDate) -> Result<Self, DomainError> {
        Self::new(date.year(), date.month())
    }

    /// Parse the stored `YYYY-MM` form. Anything else, including `2024-1`, is rejected.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidYearMonth(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }
        if !bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..].parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month; December rolls over to January of the next year.
    /// Fails after `9999-12`.
    pub fn next(self) -> Result<Self, DomainError> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Ok(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    pub fn first_day(self) -> Result<NaiveDate, DomainError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| DomainError::InvalidYearMonth(self.to_string()))
    }

    /// Rent for this month falls due on the first day of the next one.
    pub fn due_date(self) -> Result<NaiveDate, DomainError> {
        self.next()?.first_day()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let ym = YearMonth::parse("2024-01").unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 1);
        assert_eq!(ym.to_string(), "2024-01");
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        for bad in ["2024-1", "2024-13", "2024-00", "24-01", "2024/01", "2024-01-01", "abcd-ef", ""] {
            assert!(YearMonth::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_december_rolls_over() {
        let dec = YearMonth::parse("2024-12").unwrap();
        assert_eq!(dec.next().unwrap().to_string(), "2025-01");
        assert_eq!(dec.due_date().unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn test_due_date_is_first_of_next_month() {
        let jan = YearMonth::from_date(date(2024, 1, 15)).unwrap();
        assert_eq!(jan.to_string(), "2024-01");
        assert_eq!(jan.due_date().unwrap(), date(2024, 2, 1));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = YearMonth::parse("2023-12").unwrap();
        let b = YearMonth::parse("2024-01").unwrap();
        assert!(a < b);
        assert_eq!(a.next().unwrap(), b);
    }

    #[test]
    fn test_years_without_four_digit_key_rejected() {
        assert!(YearMonth::from_date(date(10000, 1, 1)).is_err());
        assert!(YearMonth::from_date(date(0, 6, 1)).is_err());

        let last = YearMonth::parse("9999-12").unwrap();
        assert!(last.next().is_err());
        assert!(last.due_date().is_err());
        assert_eq!(YearMonth::parse("9999-11").unwrap().next().unwrap(), last);
    }

    proptest! {
        #[test]
        fn prop_due_date_matches_calendar(days in 0i64..200_000) {
            let d = date(1900, 1, 1) + chrono::Duration::days(days);
            let ym = YearMonth::from_date(d).unwrap();
            let expected = date(d.year(), d.month(), 1) + Months::new(1);

            prop_assert!(ym.contains(d));
            prop_assert_eq!(ym.due_date().unwrap(), expected);
            prop_assert_eq!(YearMonth::parse(&ym.to_string()).unwrap(), ym);
        }
    }
}
