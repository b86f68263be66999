//! Target functions: time -> signed angular residual.
//!
//! A root of the residual is the instant being searched for. Each variant
//! builds its [`ReferenceFrame`] from scratch on every evaluation, so no
//! frame state can leak between calls or between searches.

use tara_angle::{normalize, wrap_360};
use tara_sky::{AngleSource, ReferenceFrame};

use crate::error::SearchError;

/// Anything the root finder can bisect.
pub trait TargetFunction {
    /// Short name for logs and batch output.
    fn label(&self) -> &str;

    /// Signed residual in degrees at Julian day `jd`; zero at the target instant.
    fn residual_deg(&self, jd: f64) -> Result<f64, SearchError>;
}

impl<T: TargetFunction + ?Sized> TargetFunction for &T {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn residual_deg(&self, jd: f64) -> Result<f64, SearchError> {
        (**self).residual_deg(jd)
    }
}

impl<T: TargetFunction + ?Sized> TargetFunction for Box<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn residual_deg(&self, jd: f64) -> Result<f64, SearchError> {
        (**self).residual_deg(jd)
    }
}

/// Sidereal offset of a frame, read as a residual against 0°.
///
/// Residual = `normalize(ayanamsha)`, so the root is the epoch at which the
/// frame coincided with the tropical zodiac.
#[derive(Debug, Clone)]
pub struct OffsetFromZero<S> {
    source: S,
    frame: ReferenceFrame,
    label: String,
}

impl<S: AngleSource> OffsetFromZero<S> {
    pub fn new(source: S, frame: impl Into<ReferenceFrame>) -> Self {
        let frame = frame.into();
        let label = match frame {
            ReferenceFrame::Tropical => "Tropical".to_string(),
            ReferenceFrame::System(system) => system.name().to_string(),
            ReferenceFrame::Anchored {
                anchor_jd,
                offset_deg,
            } => format!("Anchored(JD {anchor_jd}, {offset_deg} deg)"),
        };
        Self {
            source,
            frame,
            label,
        }
    }

    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }
}

impl<S: AngleSource> TargetFunction for OffsetFromZero<S> {
    fn label(&self) -> &str {
        &self.label
    }

    fn residual_deg(&self, jd: f64) -> Result<f64, SearchError> {
        let raw = self.source.ayanamsha_deg(jd, &self.frame)?;
        Ok(normalize(raw)?)
    }
}

/// Which half-open range a star longitude is expressed in before subtracting
/// the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LongitudeBranch {
    /// `[0, 360)`, cut at 0°.
    Unsigned,
    /// `(-180, 180]`, cut at 180°.
    Signed,
}

/// Star longitude minus a fixed target longitude.
///
/// The frame is anchored at the tested instant itself (offset 0°), so the
/// star is measured against the equinox of that very date. The residual is
/// not normalised; instead the longitude is taken on whichever branch keeps
/// its cut at least 90° away from the target, which keeps the residual
/// continuous and monotonic around the root.
#[derive(Debug, Clone)]
pub struct StarOffsetFromTarget<S> {
    source: S,
    star: String,
    target_deg: f64,
    branch: LongitudeBranch,
    branch_target_deg: f64,
    label: String,
}

impl<S: AngleSource> StarOffsetFromTarget<S> {
    /// `target_deg` may be any finite angle; it is reduced to `[0, 360)`.
    pub fn new(source: S, star: impl Into<String>, target_deg: f64) -> Result<Self, SearchError> {
        let star = star.into();
        let target = wrap_360(target_deg)?;
        let (branch, branch_target_deg) = if (90.0..=270.0).contains(&target) {
            (LongitudeBranch::Unsigned, target)
        } else {
            (LongitudeBranch::Signed, normalize(target)?)
        };
        let label = format!("{star} @ {target:.6}");
        Ok(Self {
            source,
            star,
            target_deg: target,
            branch,
            branch_target_deg,
            label,
        })
    }

    pub fn star(&self) -> &str {
        &self.star
    }

    /// Target longitude in `[0, 360)`.
    pub fn target_deg(&self) -> f64 {
        self.target_deg
    }

    /// Raw star longitude in `[0, 360)` measured in the self-anchored frame.
    pub fn longitude_deg(&self, jd: f64) -> Result<f64, SearchError> {
        let frame = ReferenceFrame::anchored(jd, 0.0);
        Ok(self.source.star_longitude_deg(&self.star, jd, &frame)?)
    }
}

impl<S: AngleSource> TargetFunction for StarOffsetFromTarget<S> {
    fn label(&self) -> &str {
        &self.label
    }

    fn residual_deg(&self, jd: f64) -> Result<f64, SearchError> {
        let raw = self.longitude_deg(jd)?;
        let lon = match self.branch {
            LongitudeBranch::Unsigned => raw,
            LongitudeBranch::Signed => normalize(raw)?,
        };
        Ok(lon - self.branch_target_deg)
    }
}

/// Plain closure as a target, for synthetic residuals.
pub struct FnTarget<F> {
    label: String,
    f: F,
}

impl<F: Fn(f64) -> f64> FnTarget<F> {
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
        }
    }
}

impl<F: Fn(f64) -> f64> TargetFunction for FnTarget<F> {
    fn label(&self) -> &str {
        &self.label
    }

    fn residual_deg(&self, jd: f64) -> Result<f64, SearchError> {
        Ok((self.f)(jd))
    }
}
