//! # Structural Calculations
//!
//! Each calculation is a pure function over JSON-serializable inputs and
//! results, returning `Result<_, CalcError>`.
//!
//! ## Available Calculations
//!
//! - [`section_properties`] - Ix, Sx, Iy, J, ho, rts for a W-shape row
//! - [`ltb`] - Lateral-torsional buckling limiting unbraced length Lr

pub mod ltb;
pub mod section_properties;

// Re-export commonly used types
pub use ltb::{compute_lr, LtbResult};
pub use section_properties::{
    derive_section_properties, DerivedSectionProperties, PropertySource, WideFlangeDimensions,
};
