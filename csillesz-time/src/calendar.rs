//! Civil dates, month lengths and one-day rollover.
//!
//! The calendar has no year 0: the day before 1-01-01 is -1-12-31.
//!
//! # Leap years
//!
//! A year is a leap year when it is divisible by 4 **and not** divisible by
//! 400. This is not the Gregorian rule: 2000 counts as a common year and 1900
//! as a leap year. Dates are validated and rolled over with this rule so that
//! results stay comparable with the calculator's published tables.

use core::fmt;

use csillesz_core::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `year % 4 == 0 && year % 400 != 0`.
///
/// ```
/// use csillesz_time::calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(1900));
/// assert!(!is_leap_year(2000));
/// assert!(!is_leap_year(2023));
/// ```
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 400 != 0
}

/// Month lengths for common and leap years, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthLengths {
    common: [u8; 12],
    leap: [u8; 12],
}

impl Default for MonthLengths {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl MonthLengths {
    pub const STANDARD: Self = Self {
        common: [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
        leap: [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    };

    pub const fn new(common: [u8; 12], leap: [u8; 12]) -> Self {
        Self { common, leap }
    }

    /// Number of days in `month` (1-12) of `year`, or `None` for a bad month.
    pub fn days_in_month(&self, year: i32, month: u8) -> Option<u8> {
        let table = if is_leap_year(year) {
            &self.leap
        } else {
            &self.common
        };
        table.get(usize::from(month).checked_sub(1)?).copied()
    }
}

/// A validated calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Validates against [`MonthLengths::STANDARD`].
    pub fn new(year: i32, month: u8, day: u8) -> AstroResult<Self> {
        Self::with_month_lengths(year, month, day, &MonthLengths::STANDARD)
    }

    pub fn with_month_lengths(
        year: i32,
        month: u8,
        day: u8,
        lengths: &MonthLengths,
    ) -> AstroResult<Self> {
        let invalid = |reason: &str| {
            AstroError::invalid_date(year, i32::from(month), i32::from(day), reason)
        };

        if year == 0 {
            return Err(invalid("there is no year 0"));
        }
        let last = lengths
            .days_in_month(year, month)
            .ok_or_else(|| invalid("month must be in [1, 12]"))?;
        if day == 0 || day > last {
            return Err(invalid(&format!("day must be in [1, {}]", last)));
        }

        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The previous calendar day, cascading through month and year.
    ///
    /// ```
    /// use csillesz_time::calendar::{CivilDate, MonthLengths};
    ///
    /// let d = CivilDate::new(2024, 3, 1).unwrap();
    /// let prev = d.previous_day(&MonthLengths::STANDARD);
    /// assert_eq!((prev.year(), prev.month(), prev.day()), (2024, 2, 29));
    /// ```
    pub fn previous_day(&self, lengths: &MonthLengths) -> Self {
        if self.day > 1 {
            return Self {
                day: self.day - 1,
                ..*self
            };
        }

        let (year, month) = if self.month == 1 {
            (previous_year(self.year), 12)
        } else {
            (self.year, self.month - 1)
        };
        let day = lengths.days_in_month(year, month).unwrap_or(28);
        Self { year, month, day }
    }

    /// The next calendar day, cascading through month and year.
    pub fn next_day(&self, lengths: &MonthLengths) -> Self {
        let last = lengths.days_in_month(self.year, self.month).unwrap_or(28);
        if self.day < last {
            return Self {
                day: self.day + 1,
                ..*self
            };
        }

        if self.month == 12 {
            Self {
                year: next_year(self.year),
                month: 1,
                day: 1,
            }
        } else {
            Self {
                month: self.month + 1,
                day: 1,
                ..*self
            }
        }
    }
}

fn previous_year(year: i32) -> i32 {
    if year == 1 {
        -1
    } else {
        year - 1
    }
}

fn next_year(year: i32) -> i32 {
    if year == -1 {
        1
    } else {
        year + 1
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

/// A civil date with a local wall-clock time to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDateTime {
    date: CivilDate,
    hour: u8,
    minute: u8,
}

impl CivilDateTime {
    /// Validates the date and a clock time in `[00:00, 23:59]`.
    ///
    /// ```
    /// use csillesz_time::CivilDateTime;
    ///
    /// assert!(CivilDateTime::new(2024, 2, 29, 12, 0).is_ok());
    /// assert!(CivilDateTime::new(2000, 2, 29, 12, 0).is_err());
    /// assert!(CivilDateTime::new(2024, 1, 1, 24, 0).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> AstroResult<Self> {
        let date = CivilDate::new(year, month, day)?;
        Self::from_date(date, hour, minute)
    }

    pub fn from_date(date: CivilDate, hour: u8, minute: u8) -> AstroResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AstroError::invalid_date(
                date.year(),
                i32::from(date.month()),
                i32::from(date.day()),
                &format!("time {:02}:{:02} outside [00:00, 23:59]", hour, minute),
            ));
        }
        Ok(Self { date, hour, minute })
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Wall-clock time as decimal hours.
    pub fn decimal_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.date, self.hour, self.minute)
    }
}
