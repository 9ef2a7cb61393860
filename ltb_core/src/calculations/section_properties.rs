//! # Section Property Derivation
//!
//! Turns a table row into the section properties the Lr equation needs.
//!
//! ## Rules
//!
//! - `d`, `bf`, `tf`, `tw` are required; every formula depends on all four.
//! - `Ix`, `Sx`, `Iy` come from the table when the row has a numeric value
//!   (including `0`), otherwise from the wide-flange formulas.
//! - `J`, `ho`, `rts` are always computed, even if the table lists them.
//!
//! ## Example
//!
//! ```rust
//! use ltb_core::calculations::section_properties::{derive_section_properties, PropertySource};
//! use ltb_core::materials::shapes::ShapeRecord;
//!
//! let shape = ShapeRecord::new("W14x22")
//!     .with("d", 13.7)
//!     .with("bf", 5.0)
//!     .with("tf", 0.335)
//!     .with("tw", 0.23)
//!     .with("Ix", 199.0);
//!
//! let props = derive_section_properties(&shape).unwrap();
//! assert_eq!(props.ix_in4, 199.0);
//! assert_eq!(props.ix_source, PropertySource::Table);
//! assert_eq!(props.sx_source, PropertySource::Computed);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::wide_flange;
use crate::errors::{CalcError, CalcResult};
use crate::materials::shapes::{columns, ShapeRecord};

/// Where a derived property value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertySource {
    /// Taken from the reference table
    Table,
    /// Computed from d, bf, tf, tw
    Computed,
}

/// The four primitive plate dimensions of a W-shape (inches)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WideFlangeDimensions {
    /// Overall depth d
    pub d_in: f64,
    /// Flange width bf
    pub bf_in: f64,
    /// Flange thickness tf
    pub tf_in: f64,
    /// Web thickness tw
    pub tw_in: f64,
}

impl WideFlangeDimensions {
    /// Read the dimensions from a table row.
    ///
    /// Fails with `MissingDimension` listing every absent dimension, then
    /// with `InvalidInput` if a present one is unusable.
    pub fn from_record(shape: &ShapeRecord) -> CalcResult<Self> {
        let d = shape.depth();
        let bf = shape.flange_width();
        let tf = shape.flange_thickness();
        let tw = shape.web_thickness();

        match (d, bf, tf, tw) {
            (Some(d_in), Some(bf_in), Some(tf_in), Some(tw_in)) => {
                let dims = WideFlangeDimensions { d_in, bf_in, tf_in, tw_in };
                dims.validate()?;
                Ok(dims)
            }
            _ => {
                let missing = [
                    (columns::DEPTH, d),
                    (columns::FLANGE_WIDTH, bf),
                    (columns::FLANGE_THICKNESS, tf),
                    (columns::WEB_THICKNESS, tw),
                ]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| name);
                Err(CalcError::missing_dimension(&shape.designation, missing))
            }
        }
    }

    /// Validate dimension values.
    pub fn validate(&self) -> CalcResult<()> {
        let dims = [
            (columns::DEPTH, self.d_in),
            (columns::FLANGE_WIDTH, self.bf_in),
            (columns::FLANGE_THICKNESS, self.tf_in),
            (columns::WEB_THICKNESS, self.tw_in),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Section dimension must be a positive, finite value",
                ));
            }
        }
        if self.web_clear_depth() <= 0.0 {
            return Err(CalcError::invalid_input(
                columns::FLANGE_THICKNESS,
                self.tf_in.to_string(),
                "Flanges (2·tf) must be thinner than the overall depth",
            ));
        }
        Ok(())
    }

    /// Web clear depth h = d − 2tf
    pub fn web_clear_depth(&self) -> f64 {
        wide_flange::web_clear_depth(self.d_in, self.tf_in)
    }
}

/// Section properties used by the Lr calculation.
///
/// Created fresh for each selection; the calculator consumes a copy.
///
/// ## JSON Example
///
/// ```json
/// {
///   "h_in": 13.03,
///   "ix_in4": 199.0,
///   "ix_source": "Table",
///   "sx_in3": 29.0,
///   "sx_source": "Table",
///   "iy_in4": 7.0,
///   "iy_source": "Table",
///   "j_in4": 0.1782,
///   "ho_in": 13.365,
///   "rts_in": 0.1962
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedSectionProperties {
    /// Web clear depth h (in)
    pub h_in: f64,

    /// Strong-axis moment of inertia Ix (in⁴)
    pub ix_in4: f64,
    /// Origin of Ix
    pub ix_source: PropertySource,

    /// Strong-axis section modulus Sx (in³)
    pub sx_in3: f64,
    /// Origin of Sx
    pub sx_source: PropertySource,

    /// Weak-axis moment of inertia Iy (in⁴)
    pub iy_in4: f64,
    /// Origin of Iy
    pub iy_source: PropertySource,

    /// Torsional constant J (in⁴)
    pub j_in4: f64,

    /// Distance between flange centroids ho (in)
    pub ho_in: f64,

    /// Effective radius of gyration rts (in)
    pub rts_in: f64,
}

/// Pick the table value when present, else compute it
fn table_or(table: Option<f64>, compute: impl FnOnce() -> f64) -> (f64, PropertySource) {
    match table {
        Some(value) => (value, PropertySource::Table),
        None => (compute(), PropertySource::Computed),
    }
}

impl DerivedSectionProperties {
    /// Derive properties from plate dimensions and optional tabulated values.
    pub fn from_dimensions(
        dims: &WideFlangeDimensions,
        table_ix: Option<f64>,
        table_sx: Option<f64>,
        table_iy: Option<f64>,
    ) -> Self {
        let WideFlangeDimensions { d_in: d, bf_in: bf, tf_in: tf, tw_in: tw } = *dims;
        let h = dims.web_clear_depth();

        let (ix, ix_source) = table_or(table_ix, || wide_flange::moment_of_inertia_x(d, bf, tw, h));
        let (sx, sx_source) = table_or(table_sx, || wide_flange::section_modulus_x(ix, d));
        let (iy, iy_source) = table_or(table_iy, || wide_flange::moment_of_inertia_y(bf, tf, tw, h));

        let j = wide_flange::torsional_constant(bf, tf, tw, h);
        let ho = wide_flange::flange_centroid_distance(d, tf);
        let rts = wide_flange::effective_radius_of_gyration(iy, j, sx);

        DerivedSectionProperties {
            h_in: h,
            ix_in4: ix,
            ix_source,
            sx_in3: sx,
            sx_source,
            iy_in4: iy,
            iy_source,
            j_in4: j,
            ho_in: ho,
            rts_in: rts,
        }
    }
}

/// Derive section properties for a table row.
///
/// # Returns
///
/// * `Ok(DerivedSectionProperties)` - Complete property set
/// * `Err(CalcError::MissingDimension)` - d, bf, tf or tw absent
/// * `Err(CalcError::InvalidInput)` - a dimension is non-positive
pub fn derive_section_properties(shape: &ShapeRecord) -> CalcResult<DerivedSectionProperties> {
    let dims = WideFlangeDimensions::from_record(shape)?;
    let props = DerivedSectionProperties::from_dimensions(&dims, shape.ix(), shape.sx(), shape.iy());
    debug!(
        "{}: Ix={:.3} ({:?}), Sx={:.3} ({:?}), Iy={:.3} ({:?}), J={:.4}, ho={:.3}, rts={:.4}",
        shape.designation,
        props.ix_in4,
        props.ix_source,
        props.sx_in3,
        props.sx_source,
        props.iy_in4,
        props.iy_source,
        props.j_in4,
        props.ho_in,
        props.rts_in
    );
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn worked_shape() -> ShapeRecord {
        ShapeRecord::new("W14x22-test")
            .with("d", 14.0)
            .with("bf", 6.5)
            .with("tf", 0.335)
            .with("tw", 0.23)
    }

    #[test]
    fn test_worked_example() {
        let props = derive_section_properties(&worked_shape()).unwrap();

        let (d, bf, tf, tw) = (14.0_f64, 6.5_f64, 0.335_f64, 0.23_f64);
        let h = d - 2.0 * tf;
        let ix = bf * d.powi(3) / 12.0 - (bf - tw) * h.powi(3) / 12.0;
        let sx = ix / (d / 2.0);
        let iy = 2.0 * tf * bf.powi(3) / 12.0 + h * tw.powi(3) / 12.0;
        let j = (1.0 / 3.0) * (2.0 * bf * tf.powi(3) + h * tw.powi(3));
        let ho = d - tf;
        let rts = ((iy * j).sqrt() / sx).sqrt();

        assert_relative_eq!(props.h_in, 13.33, max_relative = 1e-6);
        assert_relative_eq!(props.ix_in4, ix, max_relative = 1e-6);
        assert_relative_eq!(props.sx_in3, sx, max_relative = 1e-6);
        assert_relative_eq!(props.iy_in4, iy, max_relative = 1e-6);
        assert_relative_eq!(props.j_in4, j, max_relative = 1e-6);
        assert_relative_eq!(props.ho_in, ho, max_relative = 1e-6);
        assert_relative_eq!(props.rts_in, rts, max_relative = 1e-6);

        // Hand values
        assert_relative_eq!(props.ix_in4, 248.7435, max_relative = 1e-6);
        assert_relative_eq!(props.sx_in3, 35.53478, max_relative = 1e-6);
        assert_relative_eq!(props.iy_in4, 15.34674, max_relative = 1e-6);
        assert_relative_eq!(props.j_in4, 0.2169753, max_relative = 1e-6);
        assert_relative_eq!(props.ho_in, 13.665, max_relative = 1e-6);
        assert_relative_eq!(props.rts_in, 0.2266104, max_relative = 1e-6);

        assert_eq!(props.ix_source, PropertySource::Computed);
        assert_eq!(props.sx_source, PropertySource::Computed);
        assert_eq!(props.iy_source, PropertySource::Computed);
    }

    #[test]
    fn test_table_values_take_precedence() {
        let shape = worked_shape().with("Ix", 199.0).with("Sx", 29.0).with("Iy", 7.0);
        let props = derive_section_properties(&shape).unwrap();

        assert_eq!(props.ix_in4, 199.0);
        assert_eq!(props.sx_in3, 29.0);
        assert_eq!(props.iy_in4, 7.0);
        assert_eq!(props.ix_source, PropertySource::Table);
        assert_eq!(props.sx_source, PropertySource::Table);
        assert_eq!(props.iy_source, PropertySource::Table);

        // rts uses the tabulated Iy and Sx
        assert_relative_eq!(props.rts_in, ((7.0 * props.j_in4).sqrt() / 29.0).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_sx_from_table_ix() {
        let shape = worked_shape().with("Ix", 200.0);
        let props = derive_section_properties(&shape).unwrap();
        assert_eq!(props.ix_source, PropertySource::Table);
        assert_eq!(props.sx_source, PropertySource::Computed);
        assert_relative_eq!(props.sx_in3, 200.0 / 7.0, max_relative = 1e-12);
    }

    #[test]
    fn test_table_zero_is_a_value() {
        let shape = worked_shape().with("Iy", 0.0);
        let props = derive_section_properties(&shape).unwrap();
        assert_eq!(props.iy_in4, 0.0);
        assert_eq!(props.iy_source, PropertySource::Table);
    }

    #[test]
    fn test_table_text_is_not_a_value() {
        let shape = worked_shape().with("Ix", "n/a");
        let props = derive_section_properties(&shape).unwrap();
        assert_eq!(props.ix_source, PropertySource::Computed);
    }

    #[test]
    fn test_table_j_is_ignored() {
        let shape = worked_shape().with("J", 99.0);
        let props = derive_section_properties(&shape).unwrap();
        assert_relative_eq!(props.j_in4, 0.2169753, max_relative = 1e-6);
    }

    #[test]
    fn test_missing_dimensions() {
        for dropped in ["d", "bf", "tf", "tw"] {
            let mut shape = worked_shape();
            shape.fields.retain(|f| f.name != dropped);
            let err = derive_section_properties(&shape).unwrap_err();
            assert_eq!(err, CalcError::missing_dimension("W14x22-test", [dropped]));
        }
    }

    #[test]
    fn test_missing_lists_all_absent() {
        let shape = ShapeRecord::new("Bare").with("bf", 5.0).with("tw", None::<f64>);
        let err = derive_section_properties(&shape).unwrap_err();
        assert_eq!(err, CalcError::missing_dimension("Bare", ["d", "tf", "tw"]));
    }

    #[test]
    fn test_text_dimension_is_missing() {
        let shape = worked_shape().with("tf", "varies");
        let err = derive_section_properties(&shape).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_DIMENSION");
    }

    #[test]
    fn test_non_positive_dimension() {
        let shape = worked_shape().with("tw", 0.0);
        let err = derive_section_properties(&shape).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "tw"));

        let shape = worked_shape().with("tf", 7.0);
        let err = derive_section_properties(&shape).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "tf"));
    }

    #[test]
    fn test_idempotent() {
        let shape = worked_shape();
        let first = derive_section_properties(&shape).unwrap();
        let second = derive_section_properties(&shape).unwrap();
        assert_eq!(first, second);
    }
}
