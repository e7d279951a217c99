//! # Instrument Geometry Equations
//!
//! The few closed-form relations the instruments need, kept in one place so
//! each instrument module reads as a list of proportions.
//!
//! ## Modules
//!
//! - [`gnomon`] - Latitude-dependent gnomon triangle and dial arc
//!
//! ## Conventions
//!
//! - **Lengths**: meters
//! - **Latitude**: radians inside formulas, degrees at the API boundary
//! - **Gnomon**: the hypotenuse edge points at the celestial pole, so its
//!   elevation above the horizon equals the site latitude

pub mod gnomon;

pub use gnomon::{gnomon_base, gnomon_hypotenuse, quarter_arc_length};
