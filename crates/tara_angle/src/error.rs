//! Error types for angle conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from angle normalisation and formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum AngleError {
    /// Input lies outside the accepted `[0, 360]` range (or is NaN).
    OutOfRange { deg: f64 },
    /// Input is not a finite number.
    NonFinite,
}

impl Display for AngleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { deg } => write!(f, "angle {deg} outside [0, 360]"),
            Self::NonFinite => write!(f, "angle must be finite"),
        }
    }
}

impl Error for AngleError {}
