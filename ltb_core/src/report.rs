//! # Text Reports
//!
//! Plain-text rendering of a shape's table data and of an Lr result with its
//! step-by-step equation, for terminals and logs.
//!
//! Display precision follows the calculator's results panel: `term1` and
//! `rts` to 3 places, `term2`, `Lr` and the section properties to 2, and
//! `term3`-`term5` to 4.

use std::fmt;

use crate::calculations::ltb::LtbResult;
use crate::calculations::section_properties::PropertySource;
use crate::equations::LR_EQUATION;
use crate::materials::shapes::{CellValue, ShapeRecord};

/// Format a table cell for display; missing cells show as `-`.
///
/// ```rust
/// use ltb_core::materials::shapes::CellValue;
/// use ltb_core::report::format_cell;
///
/// assert_eq!(format_cell(&CellValue::Number(199.0)), "199");
/// assert_eq!(format_cell(&CellValue::Text("W".into())), "W");
/// assert_eq!(format_cell(&CellValue::Missing), "-");
/// ```
pub fn format_cell(value: &CellValue) -> String {
    match value {
        CellValue::Number(n) => n.to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::Missing => "-".to_string(),
    }
}

/// Every column of a shape record, one per line.
pub struct ShapeReport<'a> {
    shape: &'a ShapeRecord,
}

impl<'a> ShapeReport<'a> {
    /// Report every column of `shape`
    pub fn new(shape: &'a ShapeRecord) -> Self {
        ShapeReport { shape }
    }
}

impl fmt::Display for ShapeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.shape.designation)?;
        let width = self.shape.fields.iter().map(|field| field.name.len()).max().unwrap_or(0);
        for field in &self.shape.fields {
            writeln!(f, "  {:<width$}  {}", field.name, format_cell(&field.value), width = width)?;
        }
        Ok(())
    }
}

fn source_note(source: PropertySource) -> &'static str {
    match source {
        PropertySource::Table => "table",
        PropertySource::Computed => "computed",
    }
}

/// Lr result with equation walk-through and section property details.
pub struct LtbReport<'a> {
    designation: &'a str,
    material: Option<String>,
    result: &'a LtbResult,
}

impl<'a> LtbReport<'a> {
    /// Report `result` under the heading `designation`.
    ///
    /// ```rust
    /// use ltb_core::calculations::ltb::calculate;
    /// use ltb_core::materials::shapes::builtin_table;
    /// use ltb_core::report::LtbReport;
    ///
    /// let shape = builtin_table().get("W14x22").unwrap();
    /// let result = calculate(shape, 29000.0, 50.0).unwrap();
    /// let text = LtbReport::new("W14x22", &result).to_string();
    /// assert!(text.starts_with("Lateral-Torsional Buckling: W14x22\n"));
    /// ```
    pub fn new(designation: &'a str, result: &'a LtbResult) -> Self {
        LtbReport {
            designation,
            material: None,
            result,
        }
    }

    /// Name the steel the yield strength came from (e.g. "A992")
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }
}

impl fmt::Display for LtbReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let p = &r.properties;

        writeln!(f, "Lateral-Torsional Buckling: {}", self.designation)?;
        if let Some(material) = &self.material {
            writeln!(f, "Steel: {} (Fy = {} ksi)", material, r.fy_ksi)?;
        }
        writeln!(f)?;
        writeln!(f, "Lr = {:.2} inches ({:.2} ft)", r.lr_in, r.lr_ft())?;
        writeln!(f)?;

        writeln!(f, "AISC Equation for Lr:")?;
        writeln!(f, "  {}", LR_EQUATION)?;
        writeln!(
            f,
            "  Term 1: 1.95 × rts = 1.95 × {:.3} = {:.3}",
            p.rts_in, r.term1
        )?;
        writeln!(
            f,
            "  Term 2: E / (0.7 × Fy) = {} / (0.7 × {}) = {:.2}",
            r.e_ksi, r.fy_ksi, r.term2
        )?;
        writeln!(
            f,
            "  Term 3: √(J / (Sx × ho)) = √({:.2} / ({:.2} × {:.2})) = {:.4}",
            p.j_in4, p.sx_in3, p.ho_in, r.term3
        )?;
        writeln!(
            f,
            "  Term 4: 6.76 × ((0.7 × Fy × Sx × ho) / (E × J))² = 6.76 × ((0.7 × {} × {:.2} × {:.2}) / ({} × {:.2}))² = {:.4}",
            r.fy_ksi, p.sx_in3, p.ho_in, r.e_ksi, p.j_in4, r.term4
        )?;
        writeln!(
            f,
            "  Term 5: √(1 + √(1 + term4)) = √(1 + √(1 + {:.4})) = {:.4}",
            r.term4, r.term5
        )?;
        writeln!(
            f,
            "  Lr = {:.3} × {:.2} × {:.4} × {:.4} = {:.2} inches",
            r.term1, r.term2, r.term3, r.term5, r.lr_in
        )?;
        writeln!(f)?;

        writeln!(f, "Calculated Section Properties:")?;
        writeln!(f, "  Ix  = {:.2} in⁴ ({})", p.ix_in4, source_note(p.ix_source))?;
        writeln!(f, "  Iy  = {:.2} in⁴ ({})", p.iy_in4, source_note(p.iy_source))?;
        writeln!(f, "  Sx  = {:.2} in³ ({})", p.sx_in3, source_note(p.sx_source))?;
        writeln!(f, "  J   = {:.2} in⁴", p.j_in4)?;
        writeln!(f, "  ho  = {:.2} in", p.ho_in)?;
        writeln!(f, "  rts = {:.3} in", p.rts_in)?;
        writeln!(f)?;

        writeln!(f, "Input Values:")?;
        writeln!(f, "  E  = {} ksi", r.e_ksi)?;
        writeln!(f, "  Fy = {} ksi", r.fy_ksi)
    }
}
