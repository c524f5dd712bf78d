//! The [`Complex`] value type and its arithmetic.

use crate::element::Element;
use crate::error::{ComplexError, ComplexResult};
use std::ops::{Add, Div, Mul, Sub};

/// Complex number with real and imaginary parts of element type `T`.
///
/// `Complex` is a plain value: it owns both parts, is `Copy`, and every
/// arithmetic operation returns a new value. Only [`set_real`] and
/// [`set_imaginary`] mutate in place.
///
/// Equality and ordering compare **magnitudes** (see [`Complex::length`]), so
/// `(3, 4) == (5, 0)`. Use [`Complex::same_components`] for componentwise
/// equality.
///
/// [`set_real`]: Complex::set_real
/// [`set_imaginary`]: Complex::set_imaginary
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T: Element> {
    real: T,
    imaginary: T,
}

impl<T: Element> Complex<T> {
    /// Create a complex number from its real and imaginary parts.
    #[inline]
    pub fn new(real: T, imaginary: T) -> Self {
        Self { real, imaginary }
    }

    /// Create a purely real complex number.
    #[inline]
    pub fn from_real(real: T) -> Self {
        Self::new(real, T::zero())
    }

    /// The complex zero `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub fn real(&self) -> T {
        self.real
    }

    #[inline]
    pub fn imaginary(&self) -> T {
        self.imaginary
    }

    #[inline]
    pub fn set_real(&mut self, real: T) {
        self.real = real;
    }

    #[inline]
    pub fn set_imaginary(&mut self, imaginary: T) {
        self.imaginary = imaginary;
    }

    /// Componentwise equality, as opposed to the magnitude-based `==`.
    #[inline]
    pub fn same_components(&self, other: &Self) -> bool {
        self.real == other.real && self.imaginary == other.imaginary
    }

    /// Magnitude `sqrt(re² + im²)`.
    ///
    /// Evaluated in `f64` and narrowed back to `T`, so integer element types
    /// get a truncated result: `Complex::new(1, 1).length() == 1`.
    pub fn length(&self) -> T {
        let (re, im) = (self.real.as_f64(), self.imaginary.as_f64());
        T::from_f64((re * re + im * im).sqrt())
    }

    /// Divide by `rhs` using the conjugate form.
    ///
    /// Fails with [`ComplexError::DivisionByZero`] when both parts of `rhs`
    /// are exactly zero. A divisor with only one zero part is valid.
    ///
    /// The check is exact, so a float divisor whose squared magnitude
    /// underflows to zero is accepted and yields a non-finite result.
    ///
    /// # Panics
    ///
    /// Integer element types use `T`'s own arithmetic, so an overflowing
    /// intermediate (`re² + im²`, or an unsigned subtraction going negative)
    /// panics in debug builds and wraps in release builds.
    pub fn divide(self, rhs: Self) -> ComplexResult<Self> {
        if rhs.real.is_zero() && rhs.imaginary.is_zero() {
            tracing::debug!(dividend = %self, "Rejected division by zero complex value");
            return Err(ComplexError::DivisionByZero);
        }

        let divisor = rhs.real * rhs.real + rhs.imaginary * rhs.imaginary;
        let real = (self.real * rhs.real + self.imaginary * rhs.imaginary) / divisor;
        let imaginary = (self.imaginary * rhs.real - self.real * rhs.imaginary) / divisor;

        Ok(Self::new(real, imaginary))
    }

    /// Raise to a real power through the polar form.
    ///
    /// magnitude = |z|^exponent, angle = atan2(im, re) * exponent.
    ///
    /// The whole computation runs in `f64` whatever `T` is, then each part
    /// is narrowed back to `T`. Integer element types therefore truncate:
    /// `Complex::new(1, 1).power(2.0)` is `(0, 2)`. A zero base raised to
    /// the power 0 gives `(1, 0)`.
    pub fn power(self, exponent: f64) -> Self {
        let (re, im) = (self.real.as_f64(), self.imaginary.as_f64());

        let magnitude = (re * re + im * im).sqrt().powf(exponent);
        let angle = im.atan2(re) * exponent;
        let (sin, cos) = angle.sin_cos();

        let real = magnitude * cos;
        let imaginary = magnitude * sin;

        if T::INTEGRAL && !(real.is_finite() && imaginary.is_finite()) {
            tracing::trace!(
                base = %self,
                exponent,
                real,
                imaginary,
                "Narrowing non-finite power result into integer element type"
            );
        }

        Self::new(T::from_f64(real), T::from_f64(imaginary))
    }
}

impl<T: Element> Default for Complex<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element> Add for Complex<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl<T: Element> Sub for Complex<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl<T: Element> Mul for Complex<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + rhs.real * self.imaginary,
        )
    }
}

/// `a / b` is fallible; see [`Complex::divide`].
impl<T: Element> Div for Complex<T> {
    type Output = ComplexResult<Self>;
    fn div(self, rhs: Self) -> ComplexResult<Self> {
        self.divide(rhs)
    }
}
