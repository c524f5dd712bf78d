//! JSON round trip of `Complex` with the `serde` feature enabled.
#![cfg(feature = "serde")]

use lib_complex::Complex;

#[test]
fn test_json_field_names() {
    let c = Complex::new(2.5_f64, -1.0);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"real":2.5,"imaginary":-1.0}"#);
}

#[test]
fn test_json_roundtrip_keeps_components() {
    let c = Complex::new(-7_i32, 12);
    let json = serde_json::to_string(&c).unwrap();
    let back: Complex<i32> = serde_json::from_str(&json).unwrap();
    assert!(back.same_components(&c));
}
