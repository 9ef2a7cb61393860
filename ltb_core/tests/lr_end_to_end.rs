//! Search, select, derive and compute against the built-in shape table.

use approx::assert_relative_eq;
use ltb_core::materials::{builtin_table, lookup_grade, resolve_yield_strength};
use ltb_core::{compute_lr, derive_section_properties, get_shape, load_table, search_shapes, SharedShapeTable};

#[test]
fn w14_search_is_capped_in_table_order() {
    let hits = search_shapes(builtin_table(), "w14");
    assert_eq!(hits, vec!["W14x132", "W14x90", "W14x48", "W14x34", "W14x30"]);
}

#[test]
fn w14x22_lr_with_a992() {
    let table = builtin_table();
    let hits = search_shapes(table, "14x2");
    assert_eq!(hits, vec!["W14x26", "W14x22"]);

    let shape = get_shape(table, "W14x22").unwrap();
    let props = derive_section_properties(shape).unwrap();
    assert_relative_eq!(props.h_in, 13.03, max_relative = 1e-9);
    assert_relative_eq!(props.ix_in4, 199.0);
    assert_relative_eq!(props.sx_in3, 29.0);
    assert_relative_eq!(props.iy_in4, 7.0);
    assert_relative_eq!(props.ho_in, 13.365, max_relative = 1e-9);

    let fy = resolve_yield_strength(lookup_grade("A992").unwrap(), "").unwrap();
    let result = compute_lr(&props, 29000.0, fy.fy_ksi()).unwrap();
    assert_relative_eq!(result.term1, 0.382661399966636, max_relative = 1e-6);
    assert_relative_eq!(result.term5, 2.8105629072400036, max_relative = 1e-6);
    assert_relative_eq!(result.lr_in, 19.10572430696807, max_relative = 1e-6);
    assert!(result.term5 >= 1.0);
}

#[test]
fn custom_fy_overrides_grade() {
    let shape = get_shape(builtin_table(), "W14x22").unwrap();
    let props = derive_section_properties(shape).unwrap();

    let a36 = resolve_yield_strength(lookup_grade("A36").unwrap(), "").unwrap();
    let custom = resolve_yield_strength(lookup_grade("A36").unwrap(), "50").unwrap();
    let a992 = resolve_yield_strength(lookup_grade("A992").unwrap(), "").unwrap();

    let lr_custom = compute_lr(&props, 29000.0, custom.fy_ksi()).unwrap();
    let lr_a992 = compute_lr(&props, 29000.0, a992.fy_ksi()).unwrap();
    let lr_a36 = compute_lr(&props, 29000.0, a36.fy_ksi()).unwrap();
    assert_eq!(lr_custom, lr_a992);
    assert!(lr_a36.lr_in > lr_a992.lr_in);
}

#[test]
fn every_builtin_shape_evaluates() {
    for shape in builtin_table().records() {
        let props = derive_section_properties(shape).unwrap();
        let result = compute_lr(&props, 29000.0, 50.0).unwrap();
        assert!(result.lr_in.is_finite() && result.lr_in > 0.0, "{}", shape.designation);
    }
}

#[test]
fn user_table_without_properties_computes_them() {
    let table = load_table("Shape,d,bf,tf,tw,Ix\nTEST1,14.0,6.5,0.335,0.23,-\nTEST2,14.0,,0.335,0.23,200\n");
    assert_eq!(table.len(), 2);

    let props = derive_section_properties(get_shape(&table, "TEST1").unwrap()).unwrap();
    assert_relative_eq!(props.ix_in4, 248.74347150083327, max_relative = 1e-6);
    assert_relative_eq!(props.rts_in, 0.2266103961256114, max_relative = 1e-6);

    let err = derive_section_properties(get_shape(&table, "TEST2").unwrap()).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_DIMENSION");
}

#[test]
fn shared_table_before_and_after_load() {
    static SESSION: SharedShapeTable = SharedShapeTable::new();

    assert!(SESSION.search("W").is_empty());
    assert!(SESSION.select("W8x18").is_err());

    assert!(SESSION.load("Shape,d,bf,tf,tw\nW8x18,8.14,5.25,0.330,0.230\n"));
    assert_eq!(SESSION.search("w8"), vec!["W8x18"]);
    assert!(SESSION.select("W8x18").is_ok());
}
