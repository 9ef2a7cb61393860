//! W-Shape Reference Table
//!
//! Loads the wide-flange shape table from comma-separated text. The first
//! non-empty line is the header and must carry a `Shape` column holding the
//! designation (e.g. "W14x22"). Every other column is kept, in header order,
//! as a [`CellValue`]: numbers stay numbers, text stays text, and empty or
//! dash cells are [`CellValue::Missing`] (never zero).
//!
//! ## Example
//!
//! ```rust
//! use ltb_core::materials::shapes::ShapeTable;
//!
//! let csv = "Shape,d,bf,tf,tw,Ix\nW14x22,13.7,5.00,0.335,0.230,199\nW12x26,12.2,6.49,0.380,0.230,\n";
//! let table = ShapeTable::load(csv);
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("W14x22").and_then(|s| s.ix()), Some(199.0));
//! assert_eq!(table.get("W12x26").and_then(|s| s.ix()), None);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};

use super::csv::{is_missing_marker, parse_number, split_record};
use crate::errors::{CalcError, CalcResult};

/// Header of the designation column
pub const DESIGNATION_COLUMN: &str = "Shape";

/// Column names of the canonical geometric properties.
///
/// Matching is exact: AISC tables use both `d` (depth) and `D` (diameter).
pub mod columns {
    /// Cross-sectional area (in²)
    pub const AREA: &str = "A";
    /// Overall depth (in)
    pub const DEPTH: &str = "d";
    /// Web thickness (in)
    pub const WEB_THICKNESS: &str = "tw";
    /// Flange width (in)
    pub const FLANGE_WIDTH: &str = "bf";
    /// Flange thickness (in)
    pub const FLANGE_THICKNESS: &str = "tf";
    /// Moment of inertia about the strong axis (in⁴)
    pub const IX: &str = "Ix";
    /// Elastic section modulus about the strong axis (in³)
    pub const SX: &str = "Sx";
    /// Moment of inertia about the weak axis (in⁴)
    pub const IY: &str = "Iy";

    /// All canonical columns
    pub const CANONICAL: [&str; 8] = [AREA, DEPTH, WEB_THICKNESS, FLANGE_WIDTH, FLANGE_THICKNESS, IX, SX, IY];
}

/// One cell of the reference table.
///
/// Serializes as a JSON number, string or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell
    Number(f64),
    /// Non-numeric cell, passed through verbatim
    Text(String),
    /// Empty cell (or an AISC dash placeholder)
    Missing,
}

impl CellValue {
    /// Classify a raw CSV cell
    pub fn parse(raw: &str) -> Self {
        if is_missing_marker(raw) {
            CellValue::Missing
        } else if let Some(n) = parse_number(raw) {
            CellValue::Number(n)
        } else {
            CellValue::Text(raw.trim().to_string())
        }
    }

    /// Numeric value, if this cell holds one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if the cell is empty
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<Option<f64>> for CellValue {
    fn from(n: Option<f64>) -> Self {
        n.map_or(CellValue::Missing, CellValue::Number)
    }
}

/// A named cell of a shape record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeField {
    /// Column header
    pub name: String,
    /// Cell contents
    pub value: CellValue,
}

/// One row of the shape table.
///
/// The designation is held separately; every other column lives in `fields`
/// in header order, so pass-through columns can be listed without knowing
/// their names in advance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Shape designation (e.g., "W14x22")
    pub designation: String,

    /// All non-designation columns in header order
    pub fields: Vec<ShapeField>,
}

impl ShapeRecord {
    /// Create a record with no fields
    pub fn new(designation: impl Into<String>) -> Self {
        ShapeRecord {
            designation: designation.into(),
            fields: Vec::new(),
        }
    }

    /// Set a field, replacing any previous value for the same column
    pub fn with(mut self, name: &str, value: impl Into<CellValue>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(ShapeField {
                name: name.to_string(),
                value,
            }),
        }
        self
    }

    /// Cell for a column, `None` when the column is not in the table at all
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// Numeric value of a column; absent, empty and text cells are `None`
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(CellValue::as_number)
    }

    /// Cross-sectional area A (in²)
    pub fn area(&self) -> Option<f64> {
        self.number(columns::AREA)
    }

    /// Overall depth d (in)
    pub fn depth(&self) -> Option<f64> {
        self.number(columns::DEPTH)
    }

    /// Web thickness tw (in)
    pub fn web_thickness(&self) -> Option<f64> {
        self.number(columns::WEB_THICKNESS)
    }

    /// Flange width bf (in)
    pub fn flange_width(&self) -> Option<f64> {
        self.number(columns::FLANGE_WIDTH)
    }

    /// Flange thickness tf (in)
    pub fn flange_thickness(&self) -> Option<f64> {
        self.number(columns::FLANGE_THICKNESS)
    }

    /// Tabulated Ix (in⁴)
    pub fn ix(&self) -> Option<f64> {
        self.number(columns::IX)
    }

    /// Tabulated Sx (in³)
    pub fn sx(&self) -> Option<f64> {
        self.number(columns::SX)
    }

    /// Tabulated Iy (in⁴)
    pub fn iy(&self) -> Option<f64> {
        self.number(columns::IY)
    }

    /// Columns outside the canonical set
    pub fn extra_fields(&self) -> impl Iterator<Item = &ShapeField> {
        self.fields
            .iter()
            .filter(|f| !columns::CANONICAL.contains(&f.name.as_str()))
    }
}

impl std::fmt::Display for ShapeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation)
    }
}

/// In-memory shape table.
///
/// Records keep their source order (search results depend on it); the index
/// maps each designation to its position. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ShapeTable {
    records: Vec<ShapeRecord>,
    index: HashMap<String, usize>,
}

impl ShapeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records.
    ///
    /// Records with an empty designation are skipped. When a designation
    /// repeats, the first record wins.
    pub fn from_records(records: impl IntoIterator<Item = ShapeRecord>) -> Self {
        let mut table = ShapeTable::new();
        for record in records {
            if record.designation.trim().is_empty() {
                debug!("Skipping shape record without a designation");
                continue;
            }
            if table.index.contains_key(&record.designation) {
                warn!("Duplicate shape '{}' ignored; keeping the first row", record.designation);
                continue;
            }
            table.index.insert(record.designation.clone(), table.records.len());
            table.records.push(record);
        }
        table
    }

    /// Parse CSV text, failing on malformed input.
    ///
    /// Fails when the source has no header, the header has no `Shape`
    /// column, or a row's field count differs from the header's.
    pub fn parse(text: &str) -> CalcResult<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (header_num, header_line) = lines
            .next()
            .ok_or_else(|| CalcError::parse_error(0, "Table source is empty"))?;
        let headers = split_record(header_line, header_num)?;
        let shape_idx = headers
            .iter()
            .position(|h| h == DESIGNATION_COLUMN)
            .ok_or_else(|| {
                CalcError::parse_error(header_num, format!("Missing '{}' column", DESIGNATION_COLUMN))
            })?;

        let mut records = Vec::new();
        for (line_num, line) in lines {
            let cells = split_record(line, line_num)?;
            if cells.len() != headers.len() {
                return Err(CalcError::parse_error(
                    line_num,
                    format!("Expected {} fields, found {}", headers.len(), cells.len()),
                ));
            }

            let designation = cells[shape_idx].clone();
            let fields = headers
                .iter()
                .zip(cells)
                .enumerate()
                .filter(|(i, _)| *i != shape_idx)
                .map(|(_, (name, raw))| ShapeField {
                    name: name.clone(),
                    value: CellValue::parse(&raw),
                })
                .collect();

            records.push(ShapeRecord { designation, fields });
        }

        debug!("Parsed {} shape rows with {} columns", records.len(), headers.len());
        Ok(Self::from_records(records))
    }

    /// Parse CSV text, degrading to an empty table on malformed input.
    pub fn load(text: &str) -> Self {
        match Self::parse(text) {
            Ok(table) => {
                info!("Loaded shape table with {} shapes", table.len());
                table
            }
            Err(e) => {
                warn!("Shape table not loaded, continuing with an empty table: {}", e);
                Self::default()
            }
        }
    }

    /// Read and load a CSV file.
    ///
    /// I/O failures are reported; parse failures degrade as in [`ShapeTable::load`].
    pub fn load_file(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Ok(Self::load(&text))
    }

    /// Exact designation lookup
    pub fn get(&self, designation: &str) -> Option<&ShapeRecord> {
        self.index.get(designation).map(|&i| &self.records[i])
    }

    /// All records in source order
    pub fn records(&self) -> &[ShapeRecord] {
        &self.records
    }

    /// Iterate over designations in source order
    pub fn designations(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.designation.as_str())
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

static EMPTY_TABLE: Lazy<ShapeTable> = Lazy::new(ShapeTable::default);

/// A table loaded once per session and read from anywhere.
///
/// Readers see the empty table until [`SharedShapeTable::install`] has
/// completed, then the full table; never a partially built one.
#[derive(Debug, Default)]
pub struct SharedShapeTable {
    cell: OnceCell<ShapeTable>,
}

impl SharedShapeTable {
    /// Create an unloaded shared table
    pub const fn new() -> Self {
        SharedShapeTable {
            cell: OnceCell::new(),
        }
    }

    /// Install the session table. Returns `false` if one was already installed.
    pub fn install(&self, table: ShapeTable) -> bool {
        match self.cell.set(table) {
            Ok(()) => true,
            Err(_) => {
                warn!("Shape table already loaded; ignoring second load");
                false
            }
        }
    }

    /// Parse CSV text and install it
    pub fn load(&self, text: &str) -> bool {
        self.install(ShapeTable::load(text))
    }

    /// Current table (empty until loaded)
    pub fn table(&self) -> &ShapeTable {
        self.cell.get().unwrap_or(&*EMPTY_TABLE)
    }

    /// Check if a table has been installed
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

// ============================================================================
// Built-in Shapes (for use without a CSV file)
// ============================================================================

const BUILTIN_CSV: &str = include_str!("../../data/w_shapes.csv");

static BUILTIN_TABLE: Lazy<ShapeTable> = Lazy::new(|| ShapeTable::load(BUILTIN_CSV));

/// Table of common W-shapes bundled with the crate
pub fn builtin_table() -> &'static ShapeTable {
    &*BUILTIN_TABLE
}
