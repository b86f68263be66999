//! Multi-root detection: coarse scan, then bisection per crossing.
//!
//! [`find_root`](crate::find_root) assumes one sign change in its domain and
//! silently picks one if there are several. When a domain may hold zero or
//! several crossings, scan it at `scan_step_days` and refine each bracket.
//!
//! A normalised residual also flips sign where it wraps from +180° to -180°;
//! those jumps are skipped by requiring both bracket ends to be close.

use tracing::{debug, trace, warn};

use crate::bisection::{bisect, evaluate, is_genuine_crossing};
use crate::error::SearchError;
use crate::search_types::{RootEvent, SearchConfig, SearchDomain};
use crate::target::TargetFunction;

/// Upper bound on coarse-scan grid points per call.
pub const MAX_SCAN_STEPS: f64 = 10_000_000.0;

/// All zero crossings of `target` in `domain`, in time order.
///
/// Crossings closer together than `scan_step_days` can be missed; pick the
/// step well below the shortest expected interval between roots.
///
/// # Errors
///
/// [`SearchError::InvalidConfig`] when the grid would exceed
/// [`MAX_SCAN_STEPS`] points, or when `scan_step_days` is below the `f64`
/// spacing of the domain so the scan cannot advance.
pub fn find_roots<T: TargetFunction + ?Sized>(
    target: &T,
    domain: &SearchDomain,
    config: &SearchConfig,
) -> Result<Vec<RootEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let steps = (domain.span_days() / config.scan_step_days).ceil();
    if steps > MAX_SCAN_STEPS {
        warn!(
            label = target.label(),
            steps,
            scan_step_days = config.scan_step_days,
            "scan grid too large"
        );
        return Err(SearchError::InvalidConfig(
            "scan_step_days too small for domain",
        ));
    }

    let mut events = Vec::new();
    let mut t_prev = domain.start();
    let mut f_prev = evaluate(target, t_prev)?;
    if f_prev == 0.0 {
        events.push(RootEvent {
            jd: t_prev,
            residual_deg: f_prev,
            iterations: 0,
        });
    }

    while t_prev < domain.end() {
        let t_curr = (t_prev + config.scan_step_days).min(domain.end());
        if t_curr <= t_prev {
            warn!(
                label = target.label(),
                t_prev,
                scan_step_days = config.scan_step_days,
                "scan step below f64 resolution"
            );
            return Err(SearchError::InvalidConfig(
                "scan_step_days below f64 resolution",
            ));
        }
        let f_curr = evaluate(target, t_curr)?;

        if f_curr == 0.0 {
            events.push(RootEvent {
                jd: t_curr,
                residual_deg: f_curr,
                iterations: 0,
            });
        } else if is_genuine_crossing(f_prev, f_curr) {
            trace!(
                label = target.label(),
                t_prev,
                t_curr,
                f_prev,
                f_curr,
                "crossing bracketed"
            );
            events.push(bisect(target, t_prev, t_curr, config)?);
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    debug!(label = target.label(), count = events.len(), "scan complete");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::FnTarget;
    use tara_angle::{normalize, wrap_360};

    fn saw(t: f64, t0: f64, period: f64) -> f64 {
        normalize(wrap_360(360.0 * (t - t0) / period).unwrap()).unwrap()
    }

    #[test]
    fn wrap_jumps_are_skipped() {
        // Sawtooth wraps at t0 + period/2; only the zero at t0 is a root.
        let f = FnTarget::new("saw", |t| saw(t, 3.0, 10.0));
        let domain = SearchDomain::new(0.0, 9.0).unwrap();
        let config = SearchConfig {
            scan_step_days: 0.7,
            ..SearchConfig::with_epsilon(1e-9)
        };
        let roots = find_roots(&f, &domain, &config).unwrap();
        assert_eq!(roots.len(), 1, "roots = {roots:?}");
        assert!((roots[0].jd - 3.0).abs() < 1e-8);
    }

    #[test]
    fn finds_every_cycle() {
        // Residual crosses zero once per period, at t0 + k*period.
        let f = FnTarget::new("saw", |t| saw(t, 3.3, 10.0));
        let domain = SearchDomain::new(0.0, 45.0).unwrap();
        let config = SearchConfig {
            scan_step_days: 1.0,
            ..SearchConfig::with_epsilon(1e-9)
        };
        let roots = find_roots(&f, &domain, &config).unwrap();
        let jds: Vec<f64> = roots.iter().map(|r| r.jd).collect();
        assert_eq!(jds.len(), 5, "roots = {jds:?}");
        for (k, jd) in jds.iter().enumerate() {
            let expected = 3.3 + 10.0 * k as f64;
            assert!((jd - expected).abs() < 1e-8, "root {k} = {jd}");
        }
    }

    #[test]
    fn no_roots_is_empty() {
        let f = FnTarget::new("flat", |_| 12.0);
        let domain = SearchDomain::new(0.0, 100.0).unwrap();
        let roots = find_roots(&f, &domain, &SearchConfig::coarse()).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn scan_grid_hits_exact_root() {
        let f = FnTarget::new("linear", |t| t - 2.0);
        let domain = SearchDomain::new(1.0, 4.0).unwrap();
        let config = SearchConfig {
            scan_step_days: 0.5,
            ..SearchConfig::coarse()
        };
        let roots = find_roots(&f, &domain, &config).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].jd, 2.0);
        assert_eq!(roots[0].iterations, 0);
    }

    #[test]
    fn step_below_f64_spacing_is_config_error() {
        // ulp at 2.4e6 is ~4.7e-10 days; a 1e-12 step cannot move t.
        let f = FnTarget::new("flat", |_| 5.0);
        let domain = SearchDomain::new(2_400_000.0, 2_400_000.000_001).unwrap();
        let config = SearchConfig {
            scan_step_days: 1e-12,
            ..SearchConfig::coarse()
        };
        assert_eq!(
            find_roots(&f, &domain, &config),
            Err(SearchError::InvalidConfig(
                "scan_step_days below f64 resolution"
            ))
        );
    }

    #[test]
    fn oversized_grid_is_config_error() {
        let f = FnTarget::new("flat", |_| 5.0);
        let domain = SearchDomain::new(2_400_000.0, 2_400_001.0).unwrap();
        let config = SearchConfig {
            scan_step_days: 1e-12,
            ..SearchConfig::coarse()
        };
        assert_eq!(
            find_roots(&f, &domain, &config),
            Err(SearchError::InvalidConfig(
                "scan_step_days too small for domain"
            ))
        );
    }

    #[test]
    fn fine_grid_within_limit_is_accepted() {
        let f = FnTarget::new("flat", |_| 5.0);
        let domain = SearchDomain::new(0.0, 1000.0).unwrap();
        let config = SearchConfig {
            scan_step_days: 0.01,
            ..SearchConfig::coarse()
        };
        assert_eq!(find_roots(&f, &domain, &config), Ok(Vec::new()));
    }

    #[test]
    fn rejects_bad_step() {
        let f = FnTarget::new("linear", |t| t);
        let domain = SearchDomain::new(-1.0, 1.0).unwrap();
        let config = SearchConfig {
            scan_step_days: -1.0,
            ..SearchConfig::coarse()
        };
        assert!(matches!(
            find_roots(&f, &domain, &config),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
