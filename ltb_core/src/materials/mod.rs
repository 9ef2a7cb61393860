//! # Materials Database
//!
//! Steel shape reference data and steel grade presets.
//!
//! - [`shapes`] - W-shape table loaded from CSV
//! - [`search`] - Suggestion search and exact selection over the table
//! - [`steel`] - ASTM grade catalog and custom Fy resolution
//!
//! ## Example
//!
//! ```rust
//! use ltb_core::materials::{builtin_table, search, select};
//!
//! let table = builtin_table();
//! let hits = search(table, "w12");
//! assert_eq!(hits, vec!["W12x40", "W12x26"]);
//!
//! let shape = select(table, &hits[0]).unwrap();
//! assert_eq!(shape.depth(), Some(11.9));
//! ```

mod csv;
pub mod search;
pub mod shapes;
pub mod steel;

pub use search::{search, select, SUGGESTION_LIMIT};
pub use shapes::{builtin_table, columns, CellValue, ShapeField, ShapeRecord, ShapeTable, SharedShapeTable};
pub use steel::{
    default_grade, lookup_grade, resolve_yield_strength, SteelGrade, YieldStrength, E_STEEL_KSI, STEEL_GRADES,
};
