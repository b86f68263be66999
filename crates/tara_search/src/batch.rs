//! Batch runner over a catalogue of coincidence targets.
//!
//! Every ayanamsha system gets an [`OffsetFromZero`] search; two fixed-star
//! placements (Revati at 359°50', the Galactic Center at mid-Mula) get a
//! [`StarOffsetFromTarget`] search. One failing entry never stops the batch.

use tara_angle::{Sexagesimal, to_sexagesimal, wrap_360};
use tara_sky::{AngleSource, AyanamshaSystem};
use tracing::{info, warn};

use crate::bisection::find_root_with;
use crate::error::SearchError;
use crate::search_types::{RootEvent, SearchConfig, SearchDomain};
use crate::target::{OffsetFromZero, StarOffsetFromTarget, TargetFunction};

/// Epoch at which [`offsets_at`] reports every system by default (JD 1927135.8747793).
pub const REFERENCE_EPOCH_JD: f64 = 1_927_135.874_779_3;

/// What a catalogue entry searches for.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogTarget {
    /// Epoch at which the system's ayanamsha was zero.
    ZeroOffset(AyanamshaSystem),
    /// Epoch at which `star`, measured in a frame anchored at that epoch,
    /// stood at `target_deg`.
    StarAt {
        star: &'static str,
        target_deg: f64,
    },
}

impl CatalogTarget {
    /// Row label: the system name, or the star and its target longitude.
    pub fn label(&self) -> String {
        match self {
            Self::ZeroOffset(system) => system.name().to_string(),
            Self::StarAt { star, target_deg } => format!("{star} @ {target_deg:.6}"),
        }
    }
}

/// One catalogue line.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub target: CatalogTarget,
    pub config: SearchConfig,
}

impl CatalogEntry {
    fn build<'a, S: AngleSource + 'a>(
        &self,
        source: &'a S,
    ) -> Result<Box<dyn TargetFunction + 'a>, SearchError> {
        let target: Box<dyn TargetFunction + 'a> = match &self.target {
            CatalogTarget::ZeroOffset(system) => Box::new(OffsetFromZero::new(source, *system)),
            CatalogTarget::StarAt { star, target_deg } => {
                Box::new(StarOffsetFromTarget::new(source, *star, *target_deg)?)
            }
        };
        Ok(target)
    }

    /// Raw collaborator angle that the residual is built from.
    fn angle_at<S: AngleSource>(&self, source: &S, jd: f64) -> Result<f64, SearchError> {
        match &self.target {
            CatalogTarget::ZeroOffset(system) => {
                Ok(source.ayanamsha_deg(jd, &(*system).into())?)
            }
            CatalogTarget::StarAt { star, target_deg } => {
                StarOffsetFromTarget::new(source, *star, *target_deg)?.longitude_deg(jd)
            }
        }
    }
}

/// Ordered list of searches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Zero points of the first `count` systems (all of them if `count` is larger).
    pub fn systems(count: usize, config: SearchConfig) -> Self {
        let entries = AyanamshaSystem::all()
            .iter()
            .take(count)
            .map(|&system| CatalogEntry {
                target: CatalogTarget::ZeroOffset(system),
                config,
            })
            .collect();
        Self { entries }
    }

    /// The two fixed-star placements, searched at the fine tolerance.
    pub fn star_placements() -> Self {
        let config = SearchConfig::fine();
        Self {
            entries: vec![
                CatalogEntry {
                    target: CatalogTarget::StarAt {
                        star: "Revati",
                        target_deg: 359.0 + 50.0 / 60.0,
                    },
                    config,
                },
                CatalogEntry {
                    target: CatalogTarget::StarAt {
                        star: "Gal. Center",
                        target_deg: 246.0 + 40.0 / 60.0,
                    },
                    config,
                },
            ],
        }
    }

    /// Every system at the coarse tolerance, then the star placements.
    pub fn standard() -> Self {
        let mut catalog = Self::systems(usize::MAX, SearchConfig::coarse());
        catalog.entries.extend(Self::star_placements().entries);
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Successful batch line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchHit {
    pub event: RootEvent,
    /// Collaborator angle at the root in `[0, 360)`: the ayanamsha, or the
    /// star's longitude.
    pub angle_deg: f64,
    /// Residual at the root, normalised and split into sexagesimal parts.
    pub residual_dms: Sexagesimal,
}

/// One batch result line.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub label: String,
    pub target: CatalogTarget,
    pub outcome: Result<BatchHit, SearchError>,
}

fn run_entry<S: AngleSource>(
    source: &S,
    entry: &CatalogEntry,
    domain: &SearchDomain,
) -> (String, Result<BatchHit, SearchError>) {
    let target = match entry.build(source) {
        Ok(t) => t,
        Err(e) => return (entry.target.label(), Err(e)),
    };
    let label = target.label().to_string();
    let outcome = find_root_with(&target, domain, &entry.config).and_then(|event| {
        let angle_deg = entry.angle_at(source, event.jd)?;
        let residual_dms = to_sexagesimal(wrap_360(event.residual_deg)?)?;
        Ok(BatchHit {
            event,
            angle_deg,
            residual_dms,
        })
    });
    (label, outcome)
}

/// Run every catalogue entry over `domain`, strictly one after another.
pub fn run_batch<S: AngleSource>(
    source: &S,
    catalog: &Catalog,
    domain: &SearchDomain,
) -> Vec<BatchRow> {
    catalog
        .entries
        .iter()
        .map(|entry| {
            let (label, outcome) = run_entry(source, entry, domain);
            match &outcome {
                Ok(hit) => info!(
                    label = label.as_str(),
                    jd = hit.event.jd,
                    iterations = hit.event.iterations,
                    "zero point"
                ),
                Err(e) => warn!(label = label.as_str(), error = %e, "search failed"),
            }
            BatchRow {
                label,
                target: entry.target.clone(),
                outcome,
            }
        })
        .collect()
}

/// A system's ayanamsha at a fixed epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetRow {
    pub system: AyanamshaSystem,
    pub outcome: Result<Sexagesimal, SearchError>,
}

/// Ayanamsha of each system at `jd`, normalised and in sexagesimal form.
pub fn offsets_at<S: AngleSource>(
    source: &S,
    systems: &[AyanamshaSystem],
    jd: f64,
) -> Vec<OffsetRow> {
    systems
        .iter()
        .map(|&system| {
            let outcome = source
                .ayanamsha_deg(jd, &system.into())
                .map_err(SearchError::from)
                .and_then(|raw| Ok(to_sexagesimal(raw)?));
            OffsetRow { system, outcome }
        })
        .collect()
}
