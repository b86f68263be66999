//! Error types for coincidence searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tara_angle::AngleError;
use tara_sky::SkyError;

/// Errors from target evaluation, bracketing or bisection.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// The angle collaborator failed a query.
    Collaborator(SkyError),
    /// A collaborator angle fell outside the normaliser's `[0, 360]` domain.
    Angle(AngleError),
    /// A target function produced NaN or infinity.
    NonFiniteResidual { jd: f64 },
    /// No sign change to bisect, or the iteration cap was hit.
    NoConvergence(&'static str),
    /// Search configuration is unusable.
    InvalidConfig(&'static str),
    /// Search domain is unusable.
    InvalidDomain(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collaborator(e) => write!(f, "collaborator error: {e}"),
            Self::Angle(e) => write!(f, "angle domain error: {e}"),
            Self::NonFiniteResidual { jd } => write!(f, "non-finite residual at JD {jd}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidDomain(msg) => write!(f, "invalid domain: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Collaborator(e) => Some(e),
            Self::Angle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SkyError> for SearchError {
    fn from(e: SkyError) -> Self {
        Self::Collaborator(e)
    }
}

impl From<AngleError> for SearchError {
    fn from(e: AngleError) -> Self {
        Self::Angle(e)
    }
}
