//! Sidereal reference systems (ayanamsha conventions).
//!
//! Every system is a mean-equinox convention. Its value at any epoch follows
//! from precession (see [`PrecessionSky`](crate::PrecessionSky)) once a single
//! number is fixed: its ayanamsha at J2000.0. Systems are defined in whichever
//! form their authors published ([`SystemAnchor`]) and reduced to that number.
//! Each system has exactly one "zero point": the epoch at which its ayanamsha
//! was 0°.
//!
//! Codes follow the conventional numbering 0..=29; systems 30.. are extra
//! Indian conventions appended after them.

use crate::precession::{general_precession_deg, jd_to_centuries};
use crate::star::{CITRA, FixedStar, PUSHYA, REVATI};

/// Julian Date of J1900.0.
const J1900_JD: f64 = 2_415_020.0;
/// Julian Date of B1950.0.
const B1950_JD: f64 = 2_433_282.423_459_05;
/// Mean equinox of 21 March 499, Ujjain (Surya Siddhanta epoch).
const SURYA_SIDDHANTA_EPOCH_JD: f64 = 1_903_396.812_865_4;
/// Aryabhata's epoch, same day.
const ARYABHATA_EPOCH_JD: f64 = 1_903_396.789_532_1;
/// Kugler/Huber reference epoch, 1 Jan 100 BCE.
const BABYLONIAN_EPOCH_JD: f64 = 1_684_532.5;

/// How a system's ayanamsha is pinned down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SystemAnchor {
    /// Ayanamsha at J2000.0, degrees.
    AtJ2000 { offset_deg: f64 },
    /// Ayanamsha equal to `offset_deg` at `epoch_jd`.
    AtEpoch { epoch_jd: f64, offset_deg: f64 },
    /// `star` held at sidereal longitude `sidereal_lon_deg`.
    Star {
        star: &'static FixedStar,
        sidereal_lon_deg: f64,
    },
}

/// Named sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AyanamshaSystem {
    /// Fagan-Bradley synetic vernal point.
    FaganBradley,
    /// Spica at 0° Libra (Indian Calendar Reform Committee, 1957).
    Lahiri,
    DeLuce,
    /// B.V. Raman.
    Raman,
    UshaShashi,
    /// Krishnamurti Paddhati.
    Krishnamurti,
    DjwalKhul,
    /// Sri Yukteshwar, "The Holy Science".
    Yukteshwar,
    JnBhasin,
    BabylonianKugler1,
    BabylonianKugler2,
    BabylonianKugler3,
    BabylonianHuber,
    /// eta Piscium (Mercier).
    BabylonianEtaPiscium,
    /// Aldebaran at 15° Taurus.
    Aldebaran15Tau,
    /// From Hipparchus' observations.
    Hipparchos,
    /// Zero at JD 1927135.8747793 (564 CE).
    Sassanian,
    /// Galactic Center at 0° Sagittarius.
    GalacticCenter0Sag,
    /// Sidereal frame fixed to the J2000 equinox.
    J2000,
    J1900,
    B1950,
    /// Mean equinox of 499 CE as sidereal zero.
    SuryaSiddhanta,
    /// Surya Siddhanta, mean Sun at 0° Aries.
    SuryaSiddhantaMeanSun,
    Aryabhata,
    AryabhataMeanSun,
    /// Surya Siddhanta epoch, Revati at 359°50'.
    SuryaSiddhantaRevati,
    /// Surya Siddhanta epoch, Citra at 180°.
    SuryaSiddhantaCitra,
    /// Spica held at 180°.
    TrueCitra,
    /// zeta Piscium held at 359°50'.
    TrueRevati,
    /// delta Cancri held at 106° (P.V.R. Narasimha Rao).
    TruePushya,
    /// delta Cancri at 106° sidereal, fixed at J2000.
    PushyaPaksha,
    /// Aldebaran at 15°47' Taurus.
    RohiniPaksha,
    DevaDutta,
    ChandraHari,
    Jagganatha,
}

const ALL_SYSTEMS: [AyanamshaSystem; 35] = [
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::DeLuce,
    AyanamshaSystem::Raman,
    AyanamshaSystem::UshaShashi,
    AyanamshaSystem::Krishnamurti,
    AyanamshaSystem::DjwalKhul,
    AyanamshaSystem::Yukteshwar,
    AyanamshaSystem::JnBhasin,
    AyanamshaSystem::BabylonianKugler1,
    AyanamshaSystem::BabylonianKugler2,
    AyanamshaSystem::BabylonianKugler3,
    AyanamshaSystem::BabylonianHuber,
    AyanamshaSystem::BabylonianEtaPiscium,
    AyanamshaSystem::Aldebaran15Tau,
    AyanamshaSystem::Hipparchos,
    AyanamshaSystem::Sassanian,
    AyanamshaSystem::GalacticCenter0Sag,
    AyanamshaSystem::J2000,
    AyanamshaSystem::J1900,
    AyanamshaSystem::B1950,
    AyanamshaSystem::SuryaSiddhanta,
    AyanamshaSystem::SuryaSiddhantaMeanSun,
    AyanamshaSystem::Aryabhata,
    AyanamshaSystem::AryabhataMeanSun,
    AyanamshaSystem::SuryaSiddhantaRevati,
    AyanamshaSystem::SuryaSiddhantaCitra,
    AyanamshaSystem::TrueCitra,
    AyanamshaSystem::TrueRevati,
    AyanamshaSystem::TruePushya,
    AyanamshaSystem::PushyaPaksha,
    AyanamshaSystem::RohiniPaksha,
    AyanamshaSystem::DevaDutta,
    AyanamshaSystem::ChandraHari,
    AyanamshaSystem::Jagganatha,
];

/// Number of systems in the conventional 0..=29 numbering.
pub const STANDARD_SYSTEM_COUNT: usize = 30;

impl AyanamshaSystem {
    /// Published definition of the system.
    pub const fn anchor(self) -> SystemAnchor {
        use SystemAnchor::{AtEpoch, AtJ2000, Star};
        match self {
            Self::FaganBradley => AtJ2000 { offset_deg: 24.736 },
            Self::Lahiri => AtJ2000 { offset_deg: 23.853 },
            Self::DeLuce => AtJ2000 { offset_deg: 21.619 },
            Self::Raman => AtJ2000 { offset_deg: 22.370 },
            Self::UshaShashi => AtJ2000 { offset_deg: 20.103 },
            Self::Krishnamurti => AtJ2000 { offset_deg: 23.850 },
            Self::DjwalKhul => AtJ2000 { offset_deg: 22.883 },
            Self::Yukteshwar => AtJ2000 { offset_deg: 22.376 },
            Self::JnBhasin => AtJ2000 { offset_deg: 22.376 },
            Self::BabylonianKugler1 => AtEpoch {
                epoch_jd: BABYLONIAN_EPOCH_JD,
                offset_deg: -5.66667,
            },
            Self::BabylonianKugler2 => AtEpoch {
                epoch_jd: BABYLONIAN_EPOCH_JD,
                offset_deg: -4.26667,
            },
            Self::BabylonianKugler3 => AtEpoch {
                epoch_jd: BABYLONIAN_EPOCH_JD,
                offset_deg: -3.41667,
            },
            Self::BabylonianHuber => AtEpoch {
                epoch_jd: BABYLONIAN_EPOCH_JD,
                offset_deg: -4.46667,
            },
            Self::BabylonianEtaPiscium => AtEpoch {
                epoch_jd: 1_673_941.0,
                offset_deg: -5.079167,
            },
            Self::Aldebaran15Tau => AtJ2000 { offset_deg: 24.870 },
            Self::Hipparchos => AtJ2000 { offset_deg: 21.176 },
            Self::Sassanian => AtEpoch {
                epoch_jd: 1_927_135.874_779_3,
                offset_deg: 0.0,
            },
            Self::GalacticCenter0Sag => AtJ2000 { offset_deg: 26.860 },
            Self::J2000 => AtJ2000 { offset_deg: 0.0 },
            Self::J1900 => AtEpoch {
                epoch_jd: J1900_JD,
                offset_deg: 0.0,
            },
            Self::B1950 => AtEpoch {
                epoch_jd: B1950_JD,
                offset_deg: 0.0,
            },
            Self::SuryaSiddhanta => AtEpoch {
                epoch_jd: SURYA_SIDDHANTA_EPOCH_JD,
                offset_deg: 0.0,
            },
            Self::SuryaSiddhantaMeanSun => AtEpoch {
                epoch_jd: SURYA_SIDDHANTA_EPOCH_JD,
                offset_deg: -0.21463395,
            },
            Self::Aryabhata => AtEpoch {
                epoch_jd: ARYABHATA_EPOCH_JD,
                offset_deg: 0.0,
            },
            Self::AryabhataMeanSun => AtEpoch {
                epoch_jd: ARYABHATA_EPOCH_JD,
                offset_deg: -0.23763238,
            },
            Self::SuryaSiddhantaRevati => AtEpoch {
                epoch_jd: SURYA_SIDDHANTA_EPOCH_JD,
                offset_deg: -0.79167046,
            },
            Self::SuryaSiddhantaCitra => AtEpoch {
                epoch_jd: SURYA_SIDDHANTA_EPOCH_JD,
                offset_deg: 2.11070444,
            },
            Self::TrueCitra => Star {
                star: &CITRA,
                sidereal_lon_deg: 180.0,
            },
            Self::TrueRevati => Star {
                star: &REVATI,
                sidereal_lon_deg: 359.0 + 50.0 / 60.0,
            },
            Self::TruePushya => Star {
                star: &PUSHYA,
                sidereal_lon_deg: 106.0,
            },
            Self::PushyaPaksha => AtJ2000 { offset_deg: 21.000 },
            Self::RohiniPaksha => AtJ2000 { offset_deg: 24.087 },
            Self::DevaDutta => AtJ2000 { offset_deg: 22.474 },
            Self::ChandraHari => AtJ2000 { offset_deg: 23.250 },
            Self::Jagganatha => AtJ2000 { offset_deg: 23.250 },
        }
    }

    /// Ayanamsha at J2000.0 in degrees, reduced to `(-180, 180]`.
    pub fn reference_j2000_deg(self) -> f64 {
        let raw = match self.anchor() {
            SystemAnchor::AtJ2000 { offset_deg } => offset_deg,
            SystemAnchor::AtEpoch {
                epoch_jd,
                offset_deg,
            } => offset_deg - general_precession_deg(jd_to_centuries(epoch_jd)),
            SystemAnchor::Star {
                star,
                sidereal_lon_deg,
            } => star.lon_j2000_deg - sidereal_lon_deg,
        };
        let r = raw.rem_euclid(360.0);
        if r > 180.0 { r - 360.0 } else { r }
    }

    /// Display name used in batch output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FaganBradley => "Fagan/Bradley",
            Self::Lahiri => "Lahiri",
            Self::DeLuce => "De Luce",
            Self::Raman => "Raman",
            Self::UshaShashi => "Usha/Shashi",
            Self::Krishnamurti => "Krishnamurti",
            Self::DjwalKhul => "Djwhal Khul",
            Self::Yukteshwar => "Yukteshwar",
            Self::JnBhasin => "J.N. Bhasin",
            Self::BabylonianKugler1 => "Babylonian/Kugler 1",
            Self::BabylonianKugler2 => "Babylonian/Kugler 2",
            Self::BabylonianKugler3 => "Babylonian/Kugler 3",
            Self::BabylonianHuber => "Babylonian/Huber",
            Self::BabylonianEtaPiscium => "Babylonian/Eta Piscium",
            Self::Aldebaran15Tau => "Aldebaran = 15 Tau",
            Self::Hipparchos => "Hipparchos",
            Self::Sassanian => "Sassanian",
            Self::GalacticCenter0Sag => "Galact. Center = 0 Sag",
            Self::J2000 => "J2000",
            Self::J1900 => "J1900",
            Self::B1950 => "B1950",
            Self::SuryaSiddhanta => "Suryasiddhanta",
            Self::SuryaSiddhantaMeanSun => "Suryasiddhanta, mean Sun",
            Self::Aryabhata => "Aryabhata",
            Self::AryabhataMeanSun => "Aryabhata, mean Sun",
            Self::SuryaSiddhantaRevati => "SS Revati",
            Self::SuryaSiddhantaCitra => "SS Citra",
            Self::TrueCitra => "True Citra",
            Self::TrueRevati => "True Revati",
            Self::TruePushya => "True Pushya (PVRN Rao)",
            Self::PushyaPaksha => "Pushya-paksha",
            Self::RohiniPaksha => "Rohini-paksha",
            Self::DevaDutta => "Deva-Dutta",
            Self::ChandraHari => "Chandra Hari",
            Self::Jagganatha => "Jagganatha",
        }
    }

    /// Stable numeric code (index into [`AyanamshaSystem::all`]).
    pub fn code(self) -> u8 {
        ALL_SYSTEMS
            .iter()
            .position(|&s| s == self)
            .map_or(u8::MAX, |i| i as u8)
    }

    /// Inverse of [`AyanamshaSystem::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        ALL_SYSTEMS.get(code as usize).copied()
    }

    /// All systems in code order.
    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for &sys in AyanamshaSystem::all() {
            assert_eq!(AyanamshaSystem::from_code(sys.code()), Some(sys));
        }
        assert_eq!(AyanamshaSystem::from_code(ALL_SYSTEMS.len() as u8), None);
    }

    #[test]
    fn conventional_numbering() {
        assert_eq!(AyanamshaSystem::FaganBradley.code(), 0);
        assert_eq!(AyanamshaSystem::Lahiri.code(), 1);
        assert_eq!(AyanamshaSystem::J2000.code(), 18);
        assert_eq!(AyanamshaSystem::TruePushya.code(), 29);
        assert_eq!(
            AyanamshaSystem::all()[STANDARD_SYSTEM_COUNT],
            AyanamshaSystem::PushyaPaksha
        );
    }

    #[test]
    fn references_small() {
        for &sys in AyanamshaSystem::all() {
            let v = sys.reference_j2000_deg();
            assert!((0.0..=28.0).contains(&v), "{sys:?} = {v}");
        }
    }

    #[test]
    fn epoch_systems_are_zero_at_their_epoch() {
        // J1900 frame: ayanamsha at J2000 equals a century of precession.
        let j1900 = AyanamshaSystem::J1900.reference_j2000_deg();
        assert!((j1900 - 1.3966).abs() < 1e-4, "{j1900}");
        assert_eq!(AyanamshaSystem::J2000.reference_j2000_deg(), 0.0);
        let ss = AyanamshaSystem::SuryaSiddhanta.reference_j2000_deg();
        assert!((ss - 20.895).abs() < 1e-3, "{ss}");
    }

    #[test]
    fn star_systems_follow_their_star() {
        let citra = AyanamshaSystem::TrueCitra.reference_j2000_deg();
        assert!((citra - (CITRA.lon_j2000_deg - 180.0)).abs() < 1e-12);
        // Revati's sidereal 359°50' wraps: reference is small and positive.
        let revati = AyanamshaSystem::TrueRevati.reference_j2000_deg();
        assert!((revati - 20.0442).abs() < 1e-3, "{revati}");
    }

    #[test]
    fn names_unique() {
        let mut names: Vec<&str> = AyanamshaSystem::all().iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AyanamshaSystem::all().len());
    }
}
