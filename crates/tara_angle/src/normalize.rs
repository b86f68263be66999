//! Raw-to-signed angle conversion.
//!
//! Collaborators report angles in `[0, 360)`. Root finding needs a signed
//! residual whose zero crossing is a genuine coincidence, so raw values are
//! folded into `(-180, 180]` by subtracting a full turn above 180°.
//!
//! [`normalize`] intentionally has no modulo: anything outside `[0, 360]`
//! points at a collaborator bug and is rejected.

use crate::error::AngleError;

/// Fold a raw angle in `[0, 360]` into the signed range `(-180, 180]`.
///
/// `180` maps to itself and `360` maps to `0`.
///
/// # Errors
/// [`AngleError::OutOfRange`] when `deg` is below 0, above 360, or NaN.
pub fn normalize(deg: f64) -> Result<f64, AngleError> {
    if !(0.0..=360.0).contains(&deg) {
        return Err(AngleError::OutOfRange { deg });
    }
    Ok(if deg > 180.0 { deg - 360.0 } else { deg })
}

/// Reduce any finite angle into `[0, 360)`.
///
/// # Errors
/// [`AngleError::NonFinite`] for NaN or infinite input.
pub fn wrap_360(deg: f64) -> Result<f64, AngleError> {
    if !deg.is_finite() {
        return Err(AngleError::NonFinite);
    }
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    Ok(if r >= 360.0 { 0.0 } else { r })
}
