//! Angle primitives used by the coincidence search.
//!
//! This crate provides:
//! - Signed normalisation of raw `[0, 360]` angles into `(-180, 180]`
//! - Reduction of arbitrary angles into `[0, 360)`
//! - Sexagesimal (degrees/minutes/seconds) splitting and display

pub mod error;
pub mod normalize;
pub mod sexagesimal;

pub use error::AngleError;
pub use normalize::{normalize, wrap_360};
pub use sexagesimal::{Sexagesimal, Sign, to_sexagesimal};
