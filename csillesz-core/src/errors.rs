//! Error types for the calculator core.
//!
//! Every fallible operation in the workspace returns [`AstroResult<T>`]. The
//! variants map one-to-one onto the ways a computation can be refused:
//!
//! | Variant | Cause | Recoverable? |
//! |---------|-------|--------------|
//! | [`Domain`](AstroError::Domain) | Zero divisor in a trigonometric ratio, non-finite input | No |
//! | [`InvalidArgumentCombination`](AstroError::InvalidArgumentCombination) | Both or neither of right ascension / hour angle given | No |
//! | [`UnknownLocation`](AstroError::UnknownLocation) | City name missing from the reference table | Yes |
//! | [`InvalidDate`](AstroError::InvalidDate) | Year 0, month outside 1-12, day past month end, bad clock time | Yes |
//!
//! "Recoverable" means a caller may ask the user for different input and try
//! again. No operation retries on its own.
//!
//! ```
//! use csillesz_core::{AstroError, MathErrorKind};
//!
//! fn safe_ratio(num: f64, den: f64) -> Result<f64, AstroError> {
//!     if den == 0.0 {
//!         return Err(AstroError::domain(
//!             "safe_ratio",
//!             MathErrorKind::DivisionByZero,
//!             "denominator is zero",
//!         ));
//!     }
//!     Ok(num / den)
//! }
//!
//! assert!(safe_ratio(1.0, 0.0).is_err());
//! ```

use thiserror::Error;

/// Classification of numerical failures carried by [`AstroError::Domain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// A cosine divisor vanished (pole or zenith singularity).
    DivisionByZero,
    /// An input or intermediate value was NaN or infinite.
    NotFinite,
    /// A finite parameter lies outside its valid range.
    OutOfRange,
}

/// Unified error type for coordinate, distance and sidereal-time calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// The computation has no defined result for these inputs.
    #[error("Domain error in {operation} ({kind:?}): {message}")]
    Domain {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Exactly one of right ascension and hour angle must be supplied.
    #[error("Invalid argument combination in {operation}: {message}")]
    InvalidArgumentCombination { operation: String, message: String },

    /// The location name is not present in the reference table.
    #[error("Unknown location \"{name}\"")]
    UnknownLocation { name: String },

    /// Calendar or clock validation failure.
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates a [`Domain`](Self::Domain) error.
    pub fn domain(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::Domain {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidArgumentCombination`](Self::InvalidArgumentCombination) error.
    pub fn invalid_combination(operation: &str, reason: &str) -> Self {
        Self::InvalidArgumentCombination {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`UnknownLocation`](Self::UnknownLocation) error.
    pub fn unknown_location(name: impl Into<String>) -> Self {
        Self::UnknownLocation { name: name.into() }
    }

    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    /// Returns `true` if different user input might succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::UnknownLocation { .. } | Self::InvalidDate { .. } => true,
            Self::Domain { .. } | Self::InvalidArgumentCombination { .. } => false,
        }
    }
}

/// Rejects NaN and infinite inputs with a [`MathErrorKind::NotFinite`] domain error.
pub fn ensure_finite(operation: &str, name: &str, value: f64) -> AstroResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AstroError::domain(
            operation,
            MathErrorKind::NotFinite,
            &format!("{} is not finite ({})", name, value),
        ))
    }
}
