//! # Wide-Flange Section Property Formulas
//!
//! Closed-form geometric properties of a doubly-symmetric I-section built
//! from three rectangles (two flanges and a web). Fillets are ignored.
//!
//! ## Notation
//!
//! ```text
//!        ┌───────────── bf ─────────────┐
//!        ███████████████████████████████  ┬ tf
//!                       ██                │
//!                       ██ ← tw           │
//!                       ██                h        d
//!                       ██                │
//!        ███████████████████████████████  ┴ tf
//! ```
//!
//! - `d`  = Overall depth
//! - `bf` = Flange width
//! - `tf` = Flange thickness
//! - `tw` = Web thickness
//! - `h`  = Web clear depth between flanges (d − 2tf)
//!
//! ## References
//!
//! - AISC 360-22, Section F2 (doubly symmetric compact I-shaped members)
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties

/// Web clear depth between the flanges
///
/// # Formula
/// h = d − 2·tf
///
/// # Example
/// ```rust
/// use ltb_core::equations::wide_flange::web_clear_depth;
///
/// let h = web_clear_depth(14.0, 0.335);
/// assert!((h - 13.33).abs() < 1e-12);
/// ```
#[inline]
pub fn web_clear_depth(d: f64, tf: f64) -> f64 {
    d - 2.0 * tf
}

/// Strong-axis moment of inertia
///
/// Full bf × d rectangle minus the two voids beside the web.
///
/// # Formula
/// Ix = bf·d³/12 − (bf − tw)·h³/12
///
/// # Example
/// ```rust
/// use ltb_core::equations::wide_flange::moment_of_inertia_x;
///
/// let ix = moment_of_inertia_x(14.0, 6.5, 0.23, 13.33);
/// assert!((ix - 248.7435).abs() < 1e-3);
/// ```
#[inline]
pub fn moment_of_inertia_x(d: f64, bf: f64, tw: f64, h: f64) -> f64 {
    bf * d.powi(3) / 12.0 - (bf - tw) * h.powi(3) / 12.0
}

/// Strong-axis elastic section modulus
///
/// # Formula
/// Sx = Ix / (d/2)
#[inline]
pub fn section_modulus_x(ix: f64, d: f64) -> f64 {
    ix / (d / 2.0)
}

/// Weak-axis moment of inertia
///
/// Two flanges about their own centroids plus the web.
///
/// # Formula
/// Iy = 2·tf·bf³/12 + h·tw³/12
#[inline]
pub fn moment_of_inertia_y(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    2.0 * tf * bf.powi(3) / 12.0 + h * tw.powi(3) / 12.0
}

/// St. Venant torsional constant, open thin-walled approximation
///
/// # Formula
/// J = (1/3)·(2·bf·tf³ + h·tw³)
///
/// # Reference
/// - AISC Design Guide 9, Torsional Analysis of Structural Steel Members (Σ b·t³/3)
#[inline]
pub fn torsional_constant(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    (1.0 / 3.0) * (2.0 * bf * tf.powi(3) + h * tw.powi(3))
}

/// Distance between flange centroids
///
/// # Formula
/// ho = d − tf
#[inline]
pub fn flange_centroid_distance(d: f64, tf: f64) -> f64 {
    d - tf
}

/// Effective radius of gyration for lateral-torsional buckling
///
/// # Formula
/// rts = √( √(Iy·J) / Sx )
///
/// The nested root is kept exactly as written; do not rearrange.
#[inline]
pub fn effective_radius_of_gyration(iy: f64, j: f64, sx: f64) -> f64 {
    ((iy * j).sqrt() / sx).sqrt()
}
