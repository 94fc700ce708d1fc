//! Whole hour / minute / second breakdown of decimal hours.
//!
//! Sidereal and universal times are carried as decimal hours. For display the
//! calculator splits them into whole units by truncation, so `6.6645 h` reads
//! `6h 39m 52s` and never rounds up into the next minute.
//!
//! ```
//! use csillesz_core::HmsBreakdown;
//!
//! let hms = HmsBreakdown::from_hours(14.5);
//! assert_eq!((hms.hours, hms.minutes, hms.seconds), (14, 30, 0));
//! assert_eq!(hms.to_string(), "14h 30m 00s");
//! ```

use core::fmt;

use crate::constants::MINUTES_PER_HOUR;
use crate::math::trunc;

/// Truncated hours, minutes and seconds of a decimal-hour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HmsBreakdown {
    pub hours: i32,
    pub minutes: u32,
    pub seconds: u32,
}

impl HmsBreakdown {
    /// Splits non-negative decimal hours into whole units.
    ///
    /// Negative input is broken down by magnitude with the sign kept on `hours`.
    pub fn from_hours(decimal_hours: f64) -> Self {
        let sign = if decimal_hours < 0.0 { -1 } else { 1 };
        let h = decimal_hours.abs();
        let whole_hours = trunc(h);
        let minutes_f = (h - whole_hours) * MINUTES_PER_HOUR;
        let whole_minutes = trunc(minutes_f);
        let whole_seconds = trunc((minutes_f - whole_minutes) * MINUTES_PER_HOUR);

        Self {
            hours: sign * whole_hours as i32,
            minutes: (whole_minutes as u32).min(59),
            seconds: (whole_seconds as u32).min(59),
        }
    }

    /// Hours and minutes only, for the "hh mm" style used by the shell.
    pub fn hm(&self) -> (i32, u32) {
        (self.hours, self.minutes)
    }
}

impl fmt::Display for HmsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {:02}m {:02}s", self.hours, self.minutes, self.seconds)
    }
}
