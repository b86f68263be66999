//! Error types reported by angle collaborators.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tara_angle::AngleError;

/// Failures of an [`AngleSource`](crate::AngleSource) query.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SkyError {
    /// Star name not present in the table.
    UnknownStar(String),
    /// Julian day is NaN or infinite.
    InvalidEpoch,
    /// Julian day outside the model's validity window.
    EpochOutOfRange { jd: f64 },
    /// Reference frame parameters are unusable.
    InvalidFrame(&'static str),
    /// Angle reduction failed.
    Angle(AngleError),
}

impl Display for SkyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStar(name) => write!(f, "unknown star: {name}"),
            Self::InvalidEpoch => write!(f, "epoch must be finite"),
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
            Self::InvalidFrame(msg) => write!(f, "invalid reference frame: {msg}"),
            Self::Angle(e) => write!(f, "angle error: {e}"),
        }
    }
}

impl Error for SkyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Angle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AngleError> for SkyError {
    fn from(e: AngleError) -> Self {
        Self::Angle(e)
    }
}
