//! Angle range reduction and sexagesimal breakdowns.

pub mod format;
pub mod normalize;

pub use format::HmsBreakdown;
pub use normalize::{normalize_symmetric_180, normalize_symmetric_90, normalize_zero_bounded};
