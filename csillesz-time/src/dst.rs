//! Daylight-saving adjustment of the local time-zone offset.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::calendar::CivilDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether, and when, local clocks run one hour ahead of standard time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DaylightSavingRule {
    /// A fixed window by calendar date, ignoring weekdays: April through
    /// September, plus March 25-31 and October 8-14.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "european"))]
    FixedEuropeanWindow,
    /// Standard time all year.
    None,
}

impl DaylightSavingRule {
    pub fn is_active(self, date: &CivilDate) -> bool {
        match self {
            Self::FixedEuropeanWindow => {
                let (month, day) = (date.month(), date.day());
                (4..=9).contains(&month)
                    || (month == 3 && day >= 25)
                    || (month == 10 && (8..=14).contains(&day))
            }
            Self::None => false,
        }
    }

    /// Hours to add to the standard zone offset on `date`: 0 or 1.
    pub fn extra_hours(self, date: &CivilDate) -> i32 {
        i32::from(self.is_active(date))
    }
}

impl fmt::Display for DaylightSavingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedEuropeanWindow => f.write_str("european"),
            Self::None => f.write_str("none"),
        }
    }
}

/// Error returned when parsing an unknown rule name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown daylight-saving rule '{0}' (expected 'european' or 'none')")]
pub struct UnknownRule(pub String);

impl FromStr for DaylightSavingRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "european" | "eu" => Ok(Self::FixedEuropeanWindow),
            "none" | "off" => Ok(Self::None),
            _ => Err(UnknownRule(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(m: u8, d: u8) -> bool {
        let date = CivilDate::new(2023, m, d).unwrap();
        DaylightSavingRule::FixedEuropeanWindow.is_active(&date)
    }

    #[test]
    fn window_edges() {
        assert!(!active(3, 24));
        assert!(active(3, 25));
        assert!(active(3, 31));
        assert!(active(4, 1));
        assert!(active(9, 30));
        assert!(!active(10, 7));
        assert!(active(10, 8));
        assert!(active(10, 14));
        assert!(!active(10, 15));
        assert!(!active(1, 15));
        assert!(!active(12, 31));
    }

    #[test]
    fn none_never_applies() {
        let date = CivilDate::new(2023, 7, 1).unwrap();
        assert_eq!(DaylightSavingRule::None.extra_hours(&date), 0);
        assert_eq!(DaylightSavingRule::FixedEuropeanWindow.extra_hours(&date), 1);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(
            "European".parse::<DaylightSavingRule>().unwrap(),
            DaylightSavingRule::FixedEuropeanWindow
        );
        assert_eq!("none".parse::<DaylightSavingRule>().unwrap(), DaylightSavingRule::None);
        assert!("summer".parse::<DaylightSavingRule>().is_err());
        assert_eq!(DaylightSavingRule::None.to_string(), "none");
    }
}
