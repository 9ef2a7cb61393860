//! Structural Steel Grades
//!
//! Yield strengths for the ASTM grades commonly specified for W-shapes, and
//! the rule for resolving a catalog grade against a user-entered custom Fy.
//!
//! ## Example
//!
//! ```rust
//! use ltb_core::materials::steel::{default_grade, resolve_yield_strength};
//!
//! let grade = default_grade();
//! assert_eq!(grade.name, "A992");
//!
//! // Blank custom text keeps the catalog grade
//! let fy = resolve_yield_strength(grade, "").unwrap();
//! assert_eq!(fy.fy_ksi(), 50.0);
//!
//! // A custom value overrides it
//! let fy = resolve_yield_strength(grade, "55").unwrap();
//! assert_eq!(fy.fy_ksi(), 55.0);
//! ```

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Modulus of elasticity of structural steel (ksi)
pub const E_STEEL_KSI: f64 = 29000.0;

/// A named steel material preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SteelGrade {
    /// Display label (e.g., "A992")
    pub name: &'static str,
    /// Minimum yield strength Fy (ksi)
    pub fy_ksi: f64,
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Fy = {} ksi)", self.name, self.fy_ksi)
    }
}

/// Grade catalog, in display order
pub const STEEL_GRADES: [SteelGrade; 4] = [
    SteelGrade { name: "A36", fy_ksi: 36.0 },
    SteelGrade { name: "A572 Grade 50", fy_ksi: 50.0 },
    SteelGrade { name: "A992", fy_ksi: 50.0 },
    SteelGrade { name: "A913 Grade 65", fy_ksi: 65.0 },
];

/// Index of the pre-selected grade (A992) in [`STEEL_GRADES`]
const DEFAULT_GRADE_INDEX: usize = 2;

/// The pre-selected grade for new calculations (A992)
pub fn default_grade() -> SteelGrade {
    STEEL_GRADES[DEFAULT_GRADE_INDEX]
}

/// Find a grade by name (case-insensitive)
pub fn lookup_grade(name: &str) -> CalcResult<SteelGrade> {
    let name = name.trim();
    STEEL_GRADES
        .iter()
        .find(|g| g.name.eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| CalcError::material_not_found(name))
}

/// The yield strength chosen for a calculation.
///
/// Either a catalog grade or a custom value that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source")]
pub enum YieldStrength {
    /// Catalog grade
    Grade(SteelGrade),
    /// Custom Fy (ksi)
    Custom { fy_ksi: f64 },
}

impl YieldStrength {
    /// Yield strength in ksi
    pub fn fy_ksi(&self) -> f64 {
        match self {
            YieldStrength::Grade(grade) => grade.fy_ksi,
            YieldStrength::Custom { fy_ksi } => *fy_ksi,
        }
    }

    /// Short label for reports
    pub fn label(&self) -> String {
        match self {
            YieldStrength::Grade(grade) => grade.name.to_string(),
            YieldStrength::Custom { .. } => "Custom".to_string(),
        }
    }
}

/// Resolve the grade selection against the custom Fy text box.
///
/// Blank text keeps `grade`. Anything else must be a finite positive number
/// and becomes [`YieldStrength::Custom`]; otherwise the input is rejected
/// rather than silently falling back to the grade.
pub fn resolve_yield_strength(grade: SteelGrade, custom_fy: &str) -> CalcResult<YieldStrength> {
    let text = custom_fy.trim();
    if text.is_empty() {
        return Ok(YieldStrength::Grade(grade));
    }

    let fy_ksi: f64 = text.parse().map_err(|_| {
        CalcError::invalid_material("fy_ksi", text, "Custom Fy must be a number")
    })?;
    if !fy_ksi.is_finite() || fy_ksi <= 0.0 {
        return Err(CalcError::invalid_material(
            "fy_ksi",
            text,
            "Custom Fy must be a positive, finite value",
        ));
    }

    Ok(YieldStrength::Custom { fy_ksi })
}
