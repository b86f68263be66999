//! Collaborator contract and the built-in mean-precession sky.

use tara_angle::wrap_360;

use crate::error::SkyError;
use crate::frame::ReferenceFrame;
use crate::precession::{general_precession_deg, jd_to_centuries};
use crate::star::find_star;

/// Validity window of [`PrecessionSky`], in Julian centuries either side of J2000.
///
/// The p_A polynomial is fitted for roughly ±200 centuries.
pub const MAX_CENTURIES_FROM_J2000: f64 = 200.0;

/// Source of raw angles for the coincidence search.
///
/// Implementations return angles reduced to `[0, 360)`. The reference frame
/// is an argument of every call; implementations must not keep a "current
/// frame" between calls.
pub trait AngleSource {
    /// Ayanamsha (sidereal offset) of `frame` at `jd`, degrees in `[0, 360)`.
    fn ayanamsha_deg(&self, jd: f64, frame: &ReferenceFrame) -> Result<f64, SkyError>;

    /// Ecliptic longitude of `star` at `jd` measured in `frame`, degrees in `[0, 360)`.
    fn star_longitude_deg(
        &self,
        star: &str,
        jd: f64,
        frame: &ReferenceFrame,
    ) -> Result<f64, SkyError>;
}

impl<S: AngleSource + ?Sized> AngleSource for &S {
    fn ayanamsha_deg(&self, jd: f64, frame: &ReferenceFrame) -> Result<f64, SkyError> {
        (**self).ayanamsha_deg(jd, frame)
    }

    fn star_longitude_deg(
        &self,
        star: &str,
        jd: f64,
        frame: &ReferenceFrame,
    ) -> Result<f64, SkyError> {
        (**self).star_longitude_deg(star, jd, frame)
    }
}

/// Mean-equinox sky driven only by general precession.
///
/// Stateless, so one instance can serve any number of concurrent searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrecessionSky;

impl PrecessionSky {
    pub const fn new() -> Self {
        Self
    }

    /// Julian centuries for `jd`, rejecting epochs the model cannot serve.
    fn centuries(jd: f64) -> Result<f64, SkyError> {
        if !jd.is_finite() {
            return Err(SkyError::InvalidEpoch);
        }
        let t = jd_to_centuries(jd);
        if t.abs() > MAX_CENTURIES_FROM_J2000 {
            return Err(SkyError::EpochOutOfRange { jd });
        }
        Ok(t)
    }

    /// Ayanamsha before reduction to `[0, 360)`; negative before the zero point.
    fn continuous_ayanamsha(t: f64, frame: &ReferenceFrame) -> Result<f64, SkyError> {
        frame.validate()?;
        Ok(match *frame {
            ReferenceFrame::Tropical => 0.0,
            ReferenceFrame::System(system) => {
                system.reference_j2000_deg() + general_precession_deg(t)
            }
            ReferenceFrame::Anchored {
                anchor_jd,
                offset_deg,
            } => {
                let t_anchor = Self::centuries(anchor_jd)?;
                offset_deg + general_precession_deg(t) - general_precession_deg(t_anchor)
            }
        })
    }
}

impl AngleSource for PrecessionSky {
    fn ayanamsha_deg(&self, jd: f64, frame: &ReferenceFrame) -> Result<f64, SkyError> {
        let t = Self::centuries(jd)?;
        Ok(wrap_360(Self::continuous_ayanamsha(t, frame)?)?)
    }

    fn star_longitude_deg(
        &self,
        star: &str,
        jd: f64,
        frame: &ReferenceFrame,
    ) -> Result<f64, SkyError> {
        let entry = find_star(star).ok_or_else(|| SkyError::UnknownStar(star.to_string()))?;
        let t = Self::centuries(jd)?;
        let tropical = entry.lon_j2000_deg + general_precession_deg(t);
        Ok(wrap_360(tropical - Self::continuous_ayanamsha(t, frame)?)?)
    }
}
