//! Diagnostic text form: `Complex(<real>f, <imaginary>f)`.
//!
//! The `f` suffix is written for every element type, integers included.
//! Width and precision flags are forwarded to each part.

use crate::complex::Complex;
use crate::element::Element;
use std::fmt;

impl<T: Element> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Complex(")?;
        fmt::Display::fmt(&self.real(), f)?;
        f.write_str("f, ")?;
        fmt::Display::fmt(&self.imaginary(), f)?;
        f.write_str("f)")
    }
}

impl<T: Element> fmt::Debug for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_format() {
        assert_eq!(Complex::new(2.0_f32, 3.0).to_string(), "Complex(2f, 3f)");
        assert_eq!(Complex::new(0.5_f64, -1.25).to_string(), "Complex(0.5f, -1.25f)");
    }

    #[test]
    fn test_integer_format_keeps_suffix() {
        assert_eq!(Complex::new(6_i32, -1).to_string(), "Complex(6f, -1f)");
    }

    #[test]
    fn test_debug_matches_display() {
        let c = Complex::new(14.0, 8.0);
        assert_eq!(format!("{c:?}"), "Complex(14f, 8f)");
    }

    #[test]
    fn test_precision_is_forwarded() {
        let c = Complex::new(0.1_f64, 1.0);
        assert_eq!(format!("{c:.2}"), "Complex(0.10f, 1.00f)");
    }
}
