//! Numeric element types a [`Complex`](crate::Complex) can be built over.
//!
//! Every primitive integer and floating-point type implements [`Element`].
//! Anything else is rejected at compile time by the trait bound on
//! `Complex<T>`.

use core::fmt;
use num_traits::Num;

/// Scalar usable as the real and imaginary parts of a complex number.
///
/// `Num` supplies the four arithmetic operators plus `zero()`/`one()`. The two
/// conversion methods move a value into `f64` for the transcendental parts of
/// the API (`length`, `power`) and back again.
pub trait Element: Num + Copy + PartialOrd + fmt::Debug + fmt::Display + 'static {
    /// `true` for integer types, where narrowing from `f64` truncates.
    const INTEGRAL: bool;

    /// Widen to `f64`.
    fn as_f64(self) -> f64;

    /// Narrow from `f64` with `as` semantics.
    ///
    /// Integer targets truncate toward zero, saturate at their bounds and map
    /// NaN to zero.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_element {
    ($integral:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const INTEGRAL: bool = $integral;

                #[inline]
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_precision_loss,
                    clippy::unnecessary_cast
                )]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::unnecessary_cast
                )]
                fn from_f64(v: f64) -> Self {
                    v as Self
                }
            }
        )*
    };
}

impl_element!(true => i8, i16, i32, i64, i128, isize);
impl_element!(true => u8, u16, u32, u64, u128, usize);
impl_element!(false => f32, f64);
