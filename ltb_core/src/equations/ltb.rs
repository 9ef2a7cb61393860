//! # Lateral-Torsional Buckling Formulas
//!
//! Terms of the AISC 360 limiting unbraced length for inelastic
//! lateral-torsional buckling of doubly symmetric I-shapes:
//!
//! ```text
//! Lr = 1.95·rts · E/(0.7·Fy) · √(J/(Sx·ho)) · √(1 + √(1 + 6.76·((0.7·Fy·Sx·ho)/(E·J))²))
//!      └ term1 ┘   └ term2 ┘    └─ term3 ─┘    └──────────────── term5 ────────────────┘
//!                                                             └──────── term4 ────────┘
//! ```
//!
//! Each term is a separate function so results can show every step.
//!
//! ## Reference
//!
//! - AISC 360-22, Eq. F2-6 (c = 1.0 for doubly symmetric I-shapes)

/// Plain-text form of the full Lr equation
pub const LR_EQUATION: &str = "Lr = 1.95 × rts × (E / (0.7 × Fy)) × √(J / (Sx × ho)) × √(1 + √(1 + 6.76 × ((0.7 × Fy × Sx × ho) / (E × J))²))";

/// term1 = 1.95·rts
#[inline]
pub fn term1(rts: f64) -> f64 {
    1.95 * rts
}

/// term2 = E / (0.7·Fy)
#[inline]
pub fn term2(e: f64, fy: f64) -> f64 {
    e / (0.7 * fy)
}

/// term3 = √( J / (Sx·ho) )
#[inline]
pub fn term3(j: f64, sx: f64, ho: f64) -> f64 {
    (j / (sx * ho)).sqrt()
}

/// term4 = 6.76·((0.7·Fy·Sx·ho) / (E·J))²
#[inline]
pub fn term4(e: f64, fy: f64, j: f64, sx: f64, ho: f64) -> f64 {
    6.76 * ((0.7 * fy * sx * ho) / (e * j)).powi(2)
}

/// term5 = √(1 + √(1 + term4))
///
/// Always ≥ 1 for a non-negative `term4`.
#[inline]
pub fn term5(term4: f64) -> f64 {
    (1.0 + (1.0 + term4).sqrt()).sqrt()
}

/// Lr = term1·term2·term3·term5
#[inline]
pub fn limiting_unbraced_length(term1: f64, term2: f64, term3: f64, term5: f64) -> f64 {
    term1 * term2 * term3 * term5
}
