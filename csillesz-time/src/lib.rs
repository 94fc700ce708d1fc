//! Local sidereal time from a civil date, wall-clock time and longitude.
//!
//! The computation runs in two stages:
//!
//! 1. **Local to universal time.** The zone offset is inferred from the
//!    longitude (whole hours, rounded down) plus one hour inside the
//!    daylight-saving window. Subtracting it can move the date one day either
//!    way; [`calendar`] handles the month and year cascade.
//! 2. **Sidereal time.** GMST at 0h UT on the universal date comes from the
//!    J2000.0 polynomial in [`sidereal`]; then
//!    `LST = GMST₀ + λ/15 + 1.0027379·UT`, reduced into `[0, 24)`.
//!
//! Month lengths and the daylight-saving rule are configuration injected into
//! [`SiderealTimeCalculator`], not global state.
//!
//! ```
//! use csillesz_time::{CivilDateTime, DaylightSavingRule, SiderealTimeCalculator};
//!
//! let calc = SiderealTimeCalculator::default().with_daylight_saving(DaylightSavingRule::None);
//! let at = CivilDateTime::new(2000, 1, 1, 0, 0).unwrap();
//! let st = calc.local_sidereal_time_at_longitude(0.0, &at).unwrap();
//! assert_eq!(st.greenwich.to_string(), "6h 39m 52s");
//! ```

pub mod calendar;
pub mod dst;
pub mod sidereal;

pub use calendar::{is_leap_year, CivilDate, CivilDateTime, MonthLengths};
pub use dst::{DaylightSavingRule, UnknownRule};
pub use sidereal::{SiderealTime, SiderealTimeCalculator, UniversalTime};
