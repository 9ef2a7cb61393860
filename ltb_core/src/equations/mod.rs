//! # Structural Engineering Equations
//!
//! Closed-form formulas used by the calculations, kept in one place so they
//! can be checked against the code references line by line.
//!
//! ## Modules
//!
//! - [`wide_flange`] - I-section geometric properties (h, Ix, Sx, Iy, J, ho, rts)
//! - [`ltb`] - Lateral-torsional buckling limiting length Lr and its terms
//!
//! ## Units
//!
//! Formulas are unit-agnostic; the calculations use inches and ksi.
//!
//! ## References
//!
//! - AISC 360-22: Specification for Structural Steel Buildings
//! - AISC Steel Construction Manual, 16th Edition

pub mod ltb;
pub mod wide_flange;

pub use ltb::LR_EQUATION;

pub use wide_flange::{
    effective_radius_of_gyration,
    flange_centroid_distance,
    moment_of_inertia_x,
    moment_of_inertia_y,
    section_modulus_x,
    torsional_constant,
    web_clear_depth,
};
