//! Reference frame passed into every collaborator query.

use crate::ayanamsha::AyanamshaSystem;
use crate::error::SkyError;

/// How sidereal longitudes are measured for a single query.
///
/// A frame is a plain value: building one has no side effects, and two
/// queries with equal frames and epochs always see the same reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceFrame {
    /// No sidereal correction; longitudes are tropical of date.
    Tropical,
    /// A named ayanamsha convention.
    System(AyanamshaSystem),
    /// User frame whose ayanamsha equals `offset_deg` at `anchor_jd` and
    /// precesses from there.
    Anchored { anchor_jd: f64, offset_deg: f64 },
}

impl ReferenceFrame {
    /// Frame anchored at `anchor_jd` with the given ayanamsha there.
    pub const fn anchored(anchor_jd: f64, offset_deg: f64) -> Self {
        Self::Anchored {
            anchor_jd,
            offset_deg,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SkyError> {
        if let Self::Anchored {
            anchor_jd,
            offset_deg,
        } = self
        {
            if !anchor_jd.is_finite() {
                return Err(SkyError::InvalidFrame("anchor_jd must be finite"));
            }
            if !offset_deg.is_finite() {
                return Err(SkyError::InvalidFrame("offset_deg must be finite"));
            }
        }
        Ok(())
    }
}

impl From<AyanamshaSystem> for ReferenceFrame {
    fn from(system: AyanamshaSystem) -> Self {
        Self::System(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_validates() {
        assert!(ReferenceFrame::anchored(2_451_545.0, 0.0).validate().is_ok());
        assert!(ReferenceFrame::anchored(f64::NAN, 0.0).validate().is_err());
        assert!(ReferenceFrame::anchored(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn system_conversion() {
        let f: ReferenceFrame = AyanamshaSystem::Raman.into();
        assert_eq!(f, ReferenceFrame::System(AyanamshaSystem::Raman));
        assert!(f.validate().is_ok());
    }
}
