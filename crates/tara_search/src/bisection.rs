//! Right-anchored bisection on a signed angular residual.
//!
//! Each pass evaluates the residual at the midpoint *and* at the current right
//! edge, then keeps the half whose ends disagree in sign:
//!
//! ```text
//! mid = (left + right) / 2
//! f(mid) * f(right) >= 0  ->  right = mid
//! otherwise               ->  left  = mid
//! ```
//!
//! The right edge is re-evaluated instead of cached because collaborator
//! residuals near a wrap point are not guaranteed to keep a stable sign.
//!
//! Beyond the plain loop, the search refuses a domain whose endpoints share a
//! sign, gives up after `max_iterations`, returns early on an exact zero, and
//! accepts a bracket that `f64` can no longer split. A converged bracket whose
//! ends sit on opposite sides of the ±180° wrap is not a root and is reported
//! as [`SearchError::NoConvergence`].

use tracing::{debug, warn};

use crate::error::SearchError;
use crate::search_types::{RootEvent, SearchConfig, SearchDomain};
use crate::target::TargetFunction;

/// A sign change between small residuals rather than a ±180° wrap jump.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Evaluate a residual, rejecting NaN and infinity.
pub(crate) fn evaluate<T: TargetFunction + ?Sized>(target: &T, jd: f64) -> Result<f64, SearchError> {
    let value = target.residual_deg(jd)?;
    if !value.is_finite() {
        return Err(SearchError::NonFiniteResidual { jd });
    }
    Ok(value)
}

/// Find the Julian day in `domain` at which `target` crosses zero.
///
/// Uses [`SearchConfig::coarse`] settings with `epsilon` as the convergence
/// width in days.
pub fn find_root<T: TargetFunction + ?Sized>(
    target: &T,
    domain: &SearchDomain,
    epsilon: f64,
) -> Result<f64, SearchError> {
    find_root_with(target, domain, &SearchConfig::with_epsilon(epsilon)).map(|event| event.jd)
}

/// Find the zero crossing of `target` in `domain`, reporting residual and
/// iteration count.
///
/// # Errors
/// - [`SearchError::NoConvergence`] when the endpoint residuals share a sign,
///   when the only sign change is the residual wrapping from +180° to -180°,
///   or when the bracket is still wider than `convergence_days` after
///   `max_iterations` passes.
/// - Any error raised by the target function.
pub fn find_root_with<T: TargetFunction + ?Sized>(
    target: &T,
    domain: &SearchDomain,
    config: &SearchConfig,
) -> Result<RootEvent, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let left = domain.start();
    let right = domain.end();
    let f_left = evaluate(target, left)?;
    let f_right = evaluate(target, right)?;

    if f_right == 0.0 {
        return Ok(exact_root(target, right, f_right, 0));
    }
    if f_left == 0.0 {
        return Ok(exact_root(target, left, f_left, 0));
    }
    if f_left * f_right > 0.0 {
        warn!(
            label = target.label(),
            start = left,
            end = right,
            f_start = f_left,
            f_end = f_right,
            "no sign change between domain endpoints"
        );
        return Err(SearchError::NoConvergence(
            "no sign change between domain endpoints",
        ));
    }

    bisect(target, left, right, config)
}

/// Bisect `[left, right]`, assumed to contain a sign change.
pub(crate) fn bisect<T: TargetFunction + ?Sized>(
    target: &T,
    mut left: f64,
    mut right: f64,
    config: &SearchConfig,
) -> Result<RootEvent, SearchError> {
    for iteration in 1..=config.max_iterations {
        let mid = 0.5 * (left + right);
        if mid <= left || mid >= right {
            // Adjacent doubles: nothing left to split.
            debug!(
                label = target.label(),
                left, right, "bracket at f64 resolution"
            );
            return finish(target, left, right, iteration - 1);
        }

        let mid_val = evaluate(target, mid)?;
        if mid_val == 0.0 {
            return Ok(exact_root(target, mid, mid_val, iteration));
        }
        let right_val = evaluate(target, right)?;

        if mid_val * right_val >= 0.0 {
            right = mid;
        } else {
            left = mid;
        }

        if right - left <= config.convergence_days {
            return finish(target, left, right, iteration);
        }
    }

    warn!(
        label = target.label(),
        left,
        right,
        width = right - left,
        max_iterations = config.max_iterations,
        "iteration limit reached"
    );
    Err(SearchError::NoConvergence("iteration limit reached"))
}

fn finish<T: TargetFunction + ?Sized>(
    target: &T,
    left: f64,
    right: f64,
    iterations: u32,
) -> Result<RootEvent, SearchError> {
    let f_left = evaluate(target, left)?;
    let f_right = evaluate(target, right)?;
    if !is_genuine_crossing(f_left, f_right) {
        warn!(
            label = target.label(),
            left,
            right,
            f_left,
            f_right,
            "sign change is a wrap discontinuity"
        );
        return Err(SearchError::NoConvergence(
            "sign change is a wrap discontinuity",
        ));
    }

    let jd = 0.5 * (left + right);
    let residual_deg = evaluate(target, jd)?;
    debug!(
        label = target.label(),
        jd, residual_deg, iterations, "root found"
    );
    Ok(RootEvent {
        jd,
        residual_deg,
        iterations,
    })
}

fn exact_root<T: TargetFunction + ?Sized>(
    target: &T,
    jd: f64,
    residual_deg: f64,
    iterations: u32,
) -> RootEvent {
    debug!(label = target.label(), jd, iterations, "exact zero");
    RootEvent {
        jd,
        residual_deg,
        iterations,
    }
}
