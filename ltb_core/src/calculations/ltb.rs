//! # Lateral-Torsional Buckling Limit (Lr)
//!
//! Computes the AISC limiting unbraced length Lr from derived section
//! properties, a modulus of elasticity and a yield strength. The five terms
//! of the closed-form equation are kept individually in the result so each
//! step can be shown and checked.
//!
//! ## Assumptions
//!
//! - Doubly symmetric I-shape (c = 1.0)
//! - E and Fy in ksi, section properties in inches
//!
//! ## Example
//!
//! ```rust
//! use ltb_core::calculations::ltb::compute_lr;
//! use ltb_core::calculations::section_properties::derive_section_properties;
//! use ltb_core::materials::shapes::builtin_table;
//! use ltb_core::materials::steel::E_STEEL_KSI;
//!
//! let shape = builtin_table().get("W14x22").unwrap();
//! let props = derive_section_properties(shape).unwrap();
//! let result = compute_lr(&props, E_STEEL_KSI, 50.0).unwrap();
//!
//! assert!(result.lr_in > 0.0);
//! assert!(result.term5 >= 1.0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::section_properties::{derive_section_properties, DerivedSectionProperties};
use crate::equations::ltb as eq;
use crate::errors::{CalcError, CalcResult};
use crate::materials::shapes::ShapeRecord;

/// Results of the Lr calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "lr_in": 19.11,
///   "term1": 0.3827,
///   "term2": 828.57,
///   "term3": 0.02144,
///   "term4": 46.60,
///   "term5": 2.8106,
///   "e_ksi": 29000.0,
///   "fy_ksi": 50.0,
///   "properties": { "h_in": 13.03, "ix_in4": 199.0, "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LtbResult {
    /// Limiting unbraced length Lr (in)
    pub lr_in: f64,

    /// 1.95·rts
    pub term1: f64,

    /// E / (0.7·Fy)
    pub term2: f64,

    /// √(J / (Sx·ho))
    pub term3: f64,

    /// 6.76·((0.7·Fy·Sx·ho) / (E·J))²
    pub term4: f64,

    /// √(1 + √(1 + term4))
    pub term5: f64,

    /// Modulus of elasticity used (ksi)
    pub e_ksi: f64,

    /// Yield strength used (ksi)
    pub fy_ksi: f64,

    /// Section properties the result was computed from
    pub properties: DerivedSectionProperties,
}

impl LtbResult {
    /// Lr in feet
    pub fn lr_ft(&self) -> f64 {
        self.lr_in / 12.0
    }
}

fn validate_material(e_ksi: f64, fy_ksi: f64) -> CalcResult<()> {
    if !e_ksi.is_finite() || e_ksi <= 0.0 {
        return Err(CalcError::invalid_material(
            "e_ksi",
            e_ksi.to_string(),
            "Modulus of elasticity must be a positive, finite value",
        ));
    }
    if !fy_ksi.is_finite() || fy_ksi <= 0.0 {
        return Err(CalcError::invalid_material(
            "fy_ksi",
            fy_ksi.to_string(),
            "Yield strength must be a positive, finite value",
        ));
    }
    Ok(())
}

/// Compute Lr.
///
/// # Arguments
///
/// * `props` - Derived section properties
/// * `e_ksi` - Modulus of elasticity (ksi), must be > 0
/// * `fy_ksi` - Yield strength (ksi), must be > 0
///
/// # Returns
///
/// * `Ok(LtbResult)` - Lr with all five terms
/// * `Err(CalcError::InvalidMaterial)` - E or Fy non-positive or non-finite
/// * `Err(CalcError::CalculationFailed)` - degenerate section properties
pub fn compute_lr(props: &DerivedSectionProperties, e_ksi: f64, fy_ksi: f64) -> CalcResult<LtbResult> {
    validate_material(e_ksi, fy_ksi)?;

    let term1 = eq::term1(props.rts_in);
    let term2 = eq::term2(e_ksi, fy_ksi);
    let term3 = eq::term3(props.j_in4, props.sx_in3, props.ho_in);
    let term4 = eq::term4(e_ksi, fy_ksi, props.j_in4, props.sx_in3, props.ho_in);
    let term5 = eq::term5(term4);
    let lr_in = eq::limiting_unbraced_length(term1, term2, term3, term5);

    let terms = [
        ("term1", term1),
        ("term2", term2),
        ("term3", term3),
        ("term4", term4),
        ("term5", term5),
        ("Lr", lr_in),
    ];
    if let Some((name, value)) = terms.iter().find(|(_, v)| !v.is_finite()) {
        return Err(CalcError::calculation_failed(
            "LateralTorsionalBuckling",
            format!("{} evaluated to {}; check the section properties", name, value),
        ));
    }

    debug!(
        "Lr = {:.3} in (E={} ksi, Fy={} ksi, terms {:.4}/{:.4}/{:.6}/{:.4}/{:.4})",
        lr_in, e_ksi, fy_ksi, term1, term2, term3, term4, term5
    );

    Ok(LtbResult {
        lr_in,
        term1,
        term2,
        term3,
        term4,
        term5,
        e_ksi,
        fy_ksi,
        properties: *props,
    })
}

/// Derive the section properties of `shape` and compute Lr.
pub fn calculate(shape: &ShapeRecord, e_ksi: f64, fy_ksi: f64) -> CalcResult<LtbResult> {
    let props = derive_section_properties(shape)?;
    compute_lr(&props, e_ksi, fy_ksi)
}
