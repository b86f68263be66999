//! Zero-coincidence search for angle-valued functions of time.
//!
//! Finds the Julian day at which a sidereal offset, or a star's sidereal
//! longitude, reaches a target angle. Residuals come from an external
//! [`AngleSource`](tara_sky::AngleSource); this crate only brackets and
//! bisects.
//!
//! This crate provides:
//! - The [`TargetFunction`] capability and its variants
//! - Right-anchored bisection with an iteration cap ([`find_root`], [`find_root_with`])
//! - Coarse-scan multi-root detection ([`find_roots`])
//! - A batch runner over the standard catalogue ([`run_batch`], [`offsets_at`])

pub mod batch;
pub mod bisection;
pub mod error;
pub mod scan;
pub mod search_types;
pub mod target;

pub use batch::{
    BatchHit, BatchRow, Catalog, CatalogEntry, CatalogTarget, OffsetRow, REFERENCE_EPOCH_JD,
    offsets_at, run_batch,
};
pub use bisection::{find_root, find_root_with};
pub use error::SearchError;
pub use scan::{MAX_SCAN_STEPS, find_roots};
pub use search_types::{
    CLASSICAL_END_JD, CLASSICAL_START_JD, DEFAULT_FAR_BOUND_JD, RootEvent, SearchConfig,
    SearchDomain,
};
pub use target::{FnTarget, OffsetFromZero, StarOffsetFromTarget, TargetFunction};
