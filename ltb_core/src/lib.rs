//! # ltb_core - W-Shape Lookup and Lateral-Torsional Buckling Engine
//!
//! `ltb_core` loads a table of steel wide-flange (W) shapes, searches it by
//! designation, derives the section properties needed for lateral-torsional
//! buckling, and computes the AISC limiting unbraced length `Lr`. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All value types implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No silent zeros**: a missing table cell is never read as `0`
//!
//! ## Quick Start
//!
//! ```rust
//! use ltb_core::{compute_lr, derive_section_properties, get_shape, load_table, search_shapes};
//!
//! let table = load_table("Shape,d,bf,tf,tw\nW14x22,13.7,5.0,0.335,0.23\nW12x26,12.2,6.49,0.38,0.23\n");
//! assert_eq!(search_shapes(&table, "w14"), vec!["W14x22"]);
//!
//! let shape = get_shape(&table, "W14x22").unwrap();
//! let props = derive_section_properties(shape).unwrap();
//! let result = compute_lr(&props, 29000.0, 50.0).unwrap();
//! assert!(result.lr_in > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Shape table, search, and steel grades
//! - [`calculations`] - Section property derivation and Lr
//! - [`equations`] - The closed-form formulas behind the calculations
//! - [`report`] - Plain-text output
//! - [`settings`] - Calculator settings file
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_lr, derive_section_properties, DerivedSectionProperties, LtbResult};
pub use errors::{CalcError, CalcResult};
pub use materials::{CellValue, ShapeRecord, ShapeTable, SharedShapeTable, SteelGrade, YieldStrength};
pub use settings::CalculatorSettings;

/// Load a shape table from raw CSV text.
///
/// Never fails: malformed input is logged and yields an empty table.
pub fn load_table(raw: &str) -> ShapeTable {
    ShapeTable::load(raw)
}

/// Up to five designations containing `query`, case-insensitively, in
/// table order. An empty query returns no suggestions.
pub fn search_shapes(table: &ShapeTable, query: &str) -> Vec<String> {
    materials::search(table, query)
}

/// Exact, case-sensitive designation lookup.
pub fn get_shape<'a>(table: &'a ShapeTable, designation: &str) -> CalcResult<&'a ShapeRecord> {
    materials::select(table, designation)
}
