//! Greenwich and local mean sidereal time.

mod gmst;
mod lst;

pub use gmst::{days_since_j2000, gmst_at_midnight, gmst_hours_at};
pub use lst::{SiderealTime, SiderealTimeCalculator, UniversalTime};
