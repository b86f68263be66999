//! Fixed stars used as sidereal anchors.
//!
//! Tropical ecliptic longitudes for the mean equinox of J2000.0, derived from
//! ICRS right ascension/declination with the J2000 obliquity. Proper motion is
//! ignored; over the few millennia searched it moves these anchors by well
//! under a degree.

/// A star (or reference direction) with a fixed J2000 ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStar {
    /// Canonical name.
    pub name: &'static str,
    /// Other accepted spellings, including catalogue designations.
    pub aliases: &'static [&'static str],
    /// Ecliptic longitude at J2000.0 in degrees, [0, 360).
    pub lon_j2000_deg: f64,
}

impl FixedStar {
    fn matches(&self, query: &str) -> bool {
        let q = query.trim();
        self.name.eq_ignore_ascii_case(q) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(q))
    }
}

pub(crate) const REVATI: FixedStar = FixedStar {
    name: "Revati",
    aliases: &["zePsc", ",zePsc", "zeta Piscium"],
    lon_j2000_deg: 19.8775,
};

pub(crate) const PUSHYA: FixedStar = FixedStar {
    name: "Pushya",
    aliases: &["deCnc", ",deCnc", "delta Cancri", "Asellus Australis"],
    lon_j2000_deg: 128.7220,
};

pub(crate) const CITRA: FixedStar = FixedStar {
    name: "Citra",
    aliases: &["Spica", "alVir", ",alVir"],
    lon_j2000_deg: 203.8414,
};

pub(crate) const ROHINI: FixedStar = FixedStar {
    name: "Rohini",
    aliases: &["Aldebaran", "alTau", ",alTau"],
    lon_j2000_deg: 69.7892,
};

pub(crate) const GALACTIC_CENTER: FixedStar = FixedStar {
    name: "Gal. Center",
    aliases: &["Galactic Center", "GalCenter", "SgrA*"],
    lon_j2000_deg: 266.8517,
};

pub(crate) const STARS: [FixedStar; 5] = [REVATI, PUSHYA, CITRA, ROHINI, GALACTIC_CENTER];

/// Look up a star by name or alias, ignoring ASCII case.
pub fn find_star(name: &str) -> Option<&'static FixedStar> {
    STARS.iter().find(|s| s.matches(name))
}
