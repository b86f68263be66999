//! Angle collaborator for the coincidence search.
//!
//! The search core never computes astronomy itself. It talks to an
//! [`AngleSource`], handing it an immutable [`ReferenceFrame`] with every
//! query instead of configuring a global sidereal mode beforehand.
//!
//! This crate provides:
//! - The [`AngleSource`] contract (ayanamsha and fixed-star longitude queries)
//! - [`PrecessionSky`], a self-contained mean-precession implementation
//! - The ayanamsha system table and a small fixed-star table

pub mod ayanamsha;
pub mod error;
pub mod frame;
pub mod precession;
pub mod sky;
pub mod star;

pub use ayanamsha::{AyanamshaSystem, STANDARD_SYSTEM_COUNT, SystemAnchor};
pub use error::SkyError;
pub use frame::ReferenceFrame;
pub use precession::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, general_precession_deg, jd_to_centuries,
};
pub use sky::{AngleSource, MAX_CENTURIES_FROM_J2000, PrecessionSky};
pub use star::{FixedStar, find_star};
