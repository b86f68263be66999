//! Accumulated precession of the equinox along the ecliptic.
//!
//! Polynomial p_A of the IAU 2006 precession model (Capitaine, Wallace &
//! Chapront 2003, Table 1; IERS Conventions 2010, Ch. 5).

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

const P_A_ARCSEC: [f64; 5] = [5028.796195, 1.1054348, 0.00007964, -0.000023857, -0.0000000383];

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// General precession in longitude, degrees, at `t` centuries from J2000.0.
///
/// Positive for epochs after J2000: tropical longitudes of fixed stars grow.
pub fn general_precession_deg(t: f64) -> f64 {
    // Horner form of c1*t + c2*t^2 + ... + c5*t^5
    let arcsec = P_A_ARCSEC.iter().rev().fold(0.0, |acc, &c| (acc + c) * t);
    arcsec / 3600.0
}
