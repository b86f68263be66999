//! Types for coincidence search: domain, configuration, result.

use crate::error::SearchError;

/// Upper bound substituted when a domain has no usable end (JD 2500000.0 = 2132-Aug-31).
pub const DEFAULT_FAR_BOUND_JD: f64 = 2_500_000.0;

/// 1 Jan of astronomical year -100, 0h, proleptic Gregorian.
pub const CLASSICAL_START_JD: f64 = 1_684_535.5;

/// 2100-Jan-01 0h.
pub const CLASSICAL_END_JD: f64 = 2_488_069.5;

/// Interval of Julian days to bisect. Always `start < end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchDomain {
    start: f64,
    end: f64,
}

impl SearchDomain {
    /// Build a domain. A non-positive `end` means "unset" and resolves to
    /// [`DEFAULT_FAR_BOUND_JD`].
    pub fn new(start: f64, end: f64) -> Result<Self, SearchError> {
        if !start.is_finite() {
            return Err(SearchError::InvalidDomain("start must be finite"));
        }
        if end.is_nan() || end == f64::INFINITY {
            return Err(SearchError::InvalidDomain("end must be finite"));
        }
        let end = if end > 0.0 { end } else { DEFAULT_FAR_BOUND_JD };
        if end <= start {
            return Err(SearchError::InvalidDomain("end must be after start"));
        }
        Ok(Self { start, end })
    }

    /// Domain from `start` to [`DEFAULT_FAR_BOUND_JD`].
    pub fn open_ended(start: f64) -> Result<Self, SearchError> {
        Self::new(start, DEFAULT_FAR_BOUND_JD)
    }

    /// Astronomical year -100 through 2100 CE.
    pub fn classical() -> Self {
        Self {
            start: CLASSICAL_START_JD,
            end: CLASSICAL_END_JD,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length in days.
    pub fn span_days(&self) -> f64 {
        self.end - self.start
    }
}

/// Bisection and scan settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Stop once the bracket is at most this wide, in days.
    pub convergence_days: f64,
    /// Hard cap on bisection passes.
    pub max_iterations: u32,
    /// Step for the coarse sign-change scan in [`find_roots`](crate::find_roots).
    pub scan_step_days: f64,
}

impl SearchConfig {
    /// 1e-7 day (~9 ms) tolerance, enough for slowly drifting offsets.
    pub fn coarse() -> Self {
        Self {
            convergence_days: 1e-7,
            max_iterations: 200,
            scan_step_days: 365.25,
        }
    }

    /// 5e-10 day (~43 us) tolerance for sub-arcsecond residuals.
    pub fn fine() -> Self {
        Self {
            convergence_days: 5e-10,
            ..Self::coarse()
        }
    }

    /// Coarse preset with a custom tolerance.
    pub fn with_epsilon(convergence_days: f64) -> Self {
        Self {
            convergence_days,
            ..Self::coarse()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.scan_step_days.is_finite() || self.scan_step_days <= 0.0 {
            return Err("scan_step_days must be positive");
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::coarse()
    }
}

/// A located zero crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEvent {
    /// Root time, Julian day.
    pub jd: f64,
    /// Target residual at `jd`, degrees.
    pub residual_deg: f64,
    /// Bisection passes used.
    pub iterations: u32,
}
