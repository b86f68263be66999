//! Sexagesimal (degrees, arc-minutes, arc-seconds) representation.

use std::fmt::{Display, Formatter};

use crate::error::AngleError;
use crate::normalize::normalize;

/// Sign of a signed angle; zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// `1.0` or `-1.0`.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// A signed angle split into whole degrees, whole minutes and fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub sign: Sign,
    /// Whole degrees, 0..=180.
    pub degrees: u16,
    /// Arc-minutes, 0..=59.
    pub minutes: u8,
    /// Arc-seconds in [0, 60), full `f64` precision.
    pub seconds: f64,
}

impl Sexagesimal {
    /// Reassemble the signed decimal degree value.
    pub fn to_degrees(&self) -> f64 {
        self.sign.factor()
            * (self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0)
    }
}

impl Display for Sexagesimal {
    /// `DDD:MM:SS.ssssssss`, prefixed with `-` for negative angles.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = match self.sign {
            Sign::Positive => "",
            Sign::Negative => "-",
        };
        write!(
            f,
            "{sign}{:03}:{:02}:{:011.8}",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Normalise a raw `[0, 360]` angle and split it into sexagesimal parts.
///
/// Degrees and minutes are truncated toward zero; seconds keep the remainder.
///
/// # Errors
/// Propagates [`AngleError::OutOfRange`] from [`normalize`].
pub fn to_sexagesimal(deg: f64) -> Result<Sexagesimal, AngleError> {
    let signed = normalize(deg)?;
    let sign = if signed < 0.0 {
        Sign::Negative
    } else {
        Sign::Positive
    };
    let magnitude = signed.abs();
    let whole = magnitude.trunc();
    let minutes_f = (magnitude - whole) * 60.0;
    let minutes = minutes_f.trunc();
    let seconds = (minutes_f - minutes) * 60.0;
    Ok(Sexagesimal {
        sign,
        degrees: whole as u16,
        minutes: minutes as u8,
        seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        let s = to_sexagesimal(0.0).unwrap();
        assert_eq!(s.sign, Sign::Positive);
        assert_eq!(s.degrees, 0);
        assert_eq!(s.minutes, 0);
        assert!(s.seconds.abs() < 1e-12);
    }

    #[test]
    fn lahiri_j2000_value() {
        // 23.853 deg = 23 deg 51' 10.8"
        let s = to_sexagesimal(23.853).unwrap();
        assert_eq!(s.degrees, 23);
        assert_eq!(s.minutes, 51);
        assert!((s.seconds - 10.8).abs() < 1e-6, "s = {}", s.seconds);
    }

    #[test]
    fn negative_after_normalisation() {
        // 359 deg 50' raw -> -0 deg 10'
        let s = to_sexagesimal(359.0 + 50.0 / 60.0).unwrap();
        assert_eq!(s.sign, Sign::Negative);
        assert_eq!(s.degrees, 0);
        assert_eq!(s.minutes, 10);
        assert!(s.seconds < 1e-6, "s = {}", s.seconds);
        assert!((s.to_degrees() - (-1.0 / 6.0)).abs() < 1e-10);
    }

    #[test]
    fn half_turn() {
        let s = to_sexagesimal(180.0).unwrap();
        assert_eq!(s.sign, Sign::Positive);
        assert_eq!(s.degrees, 180);
        assert_eq!(s.minutes, 0);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(to_sexagesimal(400.0).is_err());
    }

    #[test]
    fn display_format() {
        let s = Sexagesimal {
            sign: Sign::Negative,
            degrees: 5,
            minutes: 7,
            seconds: 3.25,
        };
        assert_eq!(s.to_string(), "-005:07:03.25000000");
    }

    #[test]
    fn display_positive() {
        let s = to_sexagesimal(10.5).unwrap();
        assert_eq!(s.to_string(), "010:30:00.00000000");
    }
}
