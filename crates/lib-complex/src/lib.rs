//! # lib-complex
//!
//! Generic complex-number value type over any primitive numeric element.
//!
//! This crate provides:
//! - [`Complex<T>`]: a `Copy` value holding a real and an imaginary part
//! - Arithmetic through `+`, `-`, `*` and a fallible `/`
//! - Polar-form exponentiation ([`Complex::power`]) evaluated in `f64`
//! - Comparisons that order values by **magnitude**, not by components
//! - The diagnostic text form `Complex(<real>f, <imaginary>f)`
//!
//! ```
//! use lib_complex::Complex;
//!
//! let a = Complex::new(2.0, 3.0);
//! let b = Complex::new(4.0, -2.0);
//!
//! assert!((a + b).same_components(&Complex::new(6.0, 1.0)));
//! assert!((a * b).same_components(&Complex::new(14.0, 8.0)));
//! assert_eq!(a.to_string(), "Complex(2f, 3f)");
//! ```
//!
//! The element type is restricted by the [`Element`] bound, so building a
//! complex number over a non-numeric type is rejected by the compiler:
//!
//! ```compile_fail
//! use lib_complex::Complex;
//!
//! let _ = Complex::new(String::from("1"), String::from("2"));
//! ```

pub mod complex;
pub mod element;
pub mod error;

mod compare;
mod display;
mod interop;

pub use complex::Complex;
pub use element::Element;
pub use error::{ComplexError, ComplexResult};

/// Re-export num_complex for callers converting to and from its types.
pub use num_complex;
