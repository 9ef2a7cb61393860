//! Shape search and selection.
//!
//! Search drives the suggestion list while the user types: a case-insensitive
//! substring match in table order, capped at [`SUGGESTION_LIMIT`]. Selection
//! commits to one designation and is exact.

use super::shapes::{ShapeRecord, ShapeTable, SharedShapeTable};
use crate::errors::{CalcError, CalcResult};

/// Maximum number of suggestions returned by [`search`]
pub const SUGGESTION_LIMIT: usize = 5;

/// Find designations containing `query`, ignoring case.
///
/// An empty query returns nothing. Results follow table order and are
/// truncated to the first [`SUGGESTION_LIMIT`] matches.
///
/// # Example
///
/// ```rust
/// use ltb_core::materials::{search::search, shapes::builtin_table};
///
/// let hits = search(builtin_table(), "w14");
/// assert_eq!(hits.len(), 5);
/// assert!(hits.iter().all(|s| s.starts_with("W14")));
/// assert!(search(builtin_table(), "").is_empty());
/// ```
pub fn search(table: &ShapeTable, query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    table
        .designations()
        .filter(|designation| designation.to_lowercase().contains(&needle))
        .take(SUGGESTION_LIMIT)
        .map(str::to_string)
        .collect()
}

/// Look up a shape by its exact designation
pub fn select<'a>(table: &'a ShapeTable, designation: &str) -> CalcResult<&'a ShapeRecord> {
    table
        .get(designation)
        .ok_or_else(|| CalcError::not_found(designation))
}

impl SharedShapeTable {
    /// [`search`] against the session table (empty until loaded)
    pub fn search(&self, query: &str) -> Vec<String> {
        search(self.table(), query)
    }

    /// [`select`] against the session table
    pub fn select(&self, designation: &str) -> CalcResult<&ShapeRecord> {
        select(self.table(), designation)
    }
}
