//! # Calculator Settings
//!
//! Defaults for the calculator, stored as JSON. Every field has a default,
//! so a partial file (or `{}`) loads.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "elastic_modulus_ksi": 29000.0,
//!   "default_grade": "A992",
//!   "table_path": "data/w_shapes.csv"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ltb_core::settings::CalculatorSettings;
//!
//! let settings: CalculatorSettings = serde_json::from_str(r#"{ "default_grade": "A36" }"#).unwrap();
//! assert_eq!(settings.elastic_modulus_ksi, 29000.0);
//! assert_eq!(settings.grade().unwrap().fy_ksi, 36.0);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::shapes::{builtin_table, ShapeTable};
use crate::materials::steel::{default_grade, lookup_grade, SteelGrade, E_STEEL_KSI};

/// Calculator-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Modulus of elasticity E (ksi)
    pub elastic_modulus_ksi: f64,

    /// Grade pre-selected for new calculations
    pub default_grade: String,

    /// CSV shape table; the built-in table is used when unset
    pub table_path: Option<PathBuf>,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            elastic_modulus_ksi: E_STEEL_KSI,
            default_grade: default_grade().name.to_string(),
            table_path: None,
        }
    }
}

impl CalculatorSettings {
    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.elastic_modulus_ksi.is_finite() || self.elastic_modulus_ksi <= 0.0 {
            return Err(CalcError::invalid_input(
                "elastic_modulus_ksi",
                self.elastic_modulus_ksi.to_string(),
                "Modulus of elasticity must be positive",
            ));
        }
        self.grade()?;
        Ok(())
    }

    /// The configured default grade
    pub fn grade(&self) -> CalcResult<SteelGrade> {
        lookup_grade(&self.default_grade)
    }

    /// Load the configured shape table.
    ///
    /// Reads `table_path` when set (an unreadable file is an error, a
    /// malformed one degrades to an empty table); otherwise returns a copy
    /// of the built-in table.
    pub fn table(&self) -> CalcResult<ShapeTable> {
        match &self.table_path {
            Some(path) => ShapeTable::load_file(path),
            None => Ok(builtin_table().clone()),
        }
    }
}

/// Load settings from a JSON file.
///
/// # Returns
///
/// * `Ok(CalculatorSettings)` - Parsed and validated settings
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::InvalidInput | MaterialNotFound)` - Invalid values
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    let settings: CalculatorSettings = serde_json::from_str(&json)?;
    settings.validate()?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("ltb_settings_test_{}.json", name))
    }

    #[test]
    fn test_defaults() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.elastic_modulus_ksi, 29000.0);
        assert_eq!(settings.default_grade, "A992");
        assert!(settings.table_path.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let settings: CalculatorSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CalculatorSettings::default());
    }

    #[test]
    fn test_validate() {
        let mut settings = CalculatorSettings::default();
        settings.elastic_modulus_ksi = 0.0;
        assert_eq!(settings.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let mut settings = CalculatorSettings::default();
        settings.default_grade = "A1085".to_string();
        assert_eq!(settings.validate().unwrap_err().error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_load_settings_file() {
        let path = temp_settings_path("load");
        fs::write(
            &path,
            r#"{ "elastic_modulus_ksi": 29500.0, "default_grade": "a36", "table_path": "shapes.csv" }"#,
        )
        .unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.elastic_modulus_ksi, 29500.0);
        assert_eq!(loaded.grade().unwrap().name, "A36");
        assert_eq!(loaded.table_path, Some(PathBuf::from("shapes.csv")));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = temp_settings_path("bad_modulus");
        fs::write(&path, r#"{ "elastic_modulus_ksi": -1.0 }"#).unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "INVALID_INPUT");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_settings_path("invalid");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_settings_path("does_not_exist");
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_table_builtin_and_file() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.table().unwrap().len(), builtin_table().len());

        let csv_path = temp_settings_path("table").with_extension("csv");
        fs::write(&csv_path, "Shape,d,bf,tf,tw\nW6x9,5.90,3.94,0.215,0.170\n").unwrap();
        let settings = CalculatorSettings {
            table_path: Some(csv_path.clone()),
            ..CalculatorSettings::default()
        };
        let table = settings.table().unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get("W6x9").is_some());
        let _ = fs::remove_file(&csv_path);
    }
}
