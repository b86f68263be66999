//! Bisection against synthetic residuals with known roots.

use tara_angle::{normalize, wrap_360};
use tara_search::{
    FnTarget, MAX_SCAN_STEPS, SearchConfig, SearchDomain, SearchError, find_root, find_root_with,
    find_roots,
};

/// Periodic angle residual crossing zero at `t0`, wrapping at `t0 ± period/2`.
fn periodic(t: f64, t0: f64, period: f64) -> f64 {
    let raw = wrap_360(360.0 * (t - t0) / period).expect("finite");
    normalize(raw).expect("in range")
}

#[test]
fn linear_residual_within_epsilon() {
    for t0 in [0.0, 1_500_000.25, 2_451_545.0, 2_499_000.75] {
        let f = FnTarget::new("linear", move |t| t - t0);
        let domain = SearchDomain::new(t0 - 100.0, t0 + 100.0).expect("domain");
        let root = find_root(&f, &domain, 1e-7).expect("root");
        assert!((root - t0).abs() <= 1e-7, "t0 = {t0}, root = {root}");
    }
}

#[test]
fn periodic_residual_single_crossing() {
    const PRECESSION_CYCLE_DAYS: f64 = 25_772.0 * 365.25;
    let t0 = 2_000_000.5;
    for period in [1.0, 365.25, PRECESSION_CYCLE_DAYS] {
        let f = FnTarget::new("periodic", move |t| periodic(t, t0, period));
        let domain = SearchDomain::new(t0 - 0.4 * period, t0 + 0.4 * period).expect("domain");
        let root = find_root(&f, &domain, 1e-7).expect("root");
        assert!((root - t0).abs() <= 1e-7, "period {period}: root = {root}");
    }
}

#[test]
fn asymmetric_domain_around_crossing() {
    let t0 = 1_825_509.543_822_6;
    let period = 25_772.0 * 365.25;
    let f = FnTarget::new("periodic", move |t| periodic(t, t0, period));
    let domain = SearchDomain::new(t0 - 140_000.0, t0 + 660_000.0).expect("domain");
    let event = find_root_with(&f, &domain, &SearchConfig::coarse()).expect("root");
    assert!((event.jd - t0).abs() <= 1e-7);
    assert!(event.residual_deg.abs() < 1e-9);
}

#[test]
fn repeated_search_is_bit_identical() {
    let t0 = 2_222_222.222;
    let f = FnTarget::new("periodic", move |t| periodic(t, t0, 365.25));
    let domain = SearchDomain::new(t0 - 100.0, t0 + 50.0).expect("domain");
    let config = SearchConfig::fine();
    let a = find_root_with(&f, &domain, &config).expect("first");
    let b = find_root_with(&f, &domain, &config).expect("second");
    assert_eq!(a.jd.to_bits(), b.jd.to_bits());
    assert_eq!(a.residual_deg.to_bits(), b.residual_deg.to_bits());
    assert_eq!(a.iterations, b.iterations);
}

#[test]
fn no_sign_change_is_no_convergence() {
    let f = FnTarget::new("positive", |t: f64| 10.0 + t.sin());
    let domain = SearchDomain::new(0.0, 1000.0).expect("domain");
    assert!(matches!(
        find_root(&f, &domain, 1e-7),
        Err(SearchError::NoConvergence(_))
    ));
}

#[test]
fn open_ended_domain_uses_default_bound() {
    // Root lies past the start, before the default far bound.
    let t0 = 2_460_000.0;
    let f = FnTarget::new("linear", move |t| t - t0);
    let domain = SearchDomain::open_ended(2_400_000.0).expect("domain");
    let root = find_root(&f, &domain, 1e-7).expect("root");
    assert!((root - t0).abs() <= 1e-7);
}

#[test]
fn tighter_epsilon_costs_more_iterations() {
    let t0 = 12_345.678;
    let f = FnTarget::new("linear", move |t| t - t0);
    let domain = SearchDomain::new(0.0, 100_000.0).expect("domain");
    let coarse = find_root_with(&f, &domain, &SearchConfig::with_epsilon(1e-3)).expect("coarse");
    let fine = find_root_with(&f, &domain, &SearchConfig::with_epsilon(1e-9)).expect("fine");
    assert!(fine.iterations > coarse.iterations);
    assert!((fine.jd - t0).abs() <= (coarse.jd - t0).abs() + 1e-9);
}

#[test]
fn wrap_discontinuity_is_not_reported_as_root() {
    // Over one half-period either side of the wrap the only sign change is
    // the jump from +180 to -180.
    let t0 = 2_000_000.5;
    let period = 365.25;
    let f = FnTarget::new("periodic", move |t| periodic(t, t0, period));
    let wrap = t0 + 0.5 * period;
    let domain = SearchDomain::new(wrap - 20.0, wrap + 20.0).expect("domain");
    let err = find_root(&f, &domain, 1e-7).unwrap_err();
    assert_eq!(
        err,
        SearchError::NoConvergence("sign change is a wrap discontinuity")
    );
}

#[test]
fn scan_step_below_f64_spacing_is_rejected() {
    let f = FnTarget::new("flat", |_| 3.0);
    let domain = SearchDomain::new(2_400_000.0, 2_400_001.0).expect("domain");
    let config = SearchConfig {
        scan_step_days: 1e-12,
        ..SearchConfig::coarse()
    };
    assert!(matches!(
        find_roots(&f, &domain, &config),
        Err(SearchError::InvalidConfig(_))
    ));
}

#[test]
fn scan_with_huge_step_count_is_rejected() {
    // Representable step, but far more grid points than the scan allows.
    let f = FnTarget::new("flat", |_| 3.0);
    let domain = SearchDomain::new(0.0, 2_400_000.0).expect("domain");
    let config = SearchConfig {
        scan_step_days: 2_400_000.0 / (MAX_SCAN_STEPS * 4.0),
        ..SearchConfig::coarse()
    };
    assert_eq!(
        find_roots(&f, &domain, &config),
        Err(SearchError::InvalidConfig(
            "scan_step_days too small for domain"
        ))
    );
}

