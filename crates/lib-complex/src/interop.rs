//! Conversions to and from tuples and `num_complex::Complex`.

use crate::complex::Complex;
use crate::element::Element;

impl<T: Element> From<(T, T)> for Complex<T> {
    #[inline]
    fn from((real, imaginary): (T, T)) -> Self {
        Self::new(real, imaginary)
    }
}

impl<T: Element> From<Complex<T>> for (T, T) {
    #[inline]
    fn from(c: Complex<T>) -> Self {
        (c.real(), c.imaginary())
    }
}

impl<T: Element> From<num_complex::Complex<T>> for Complex<T> {
    #[inline]
    fn from(c: num_complex::Complex<T>) -> Self {
        Self::new(c.re, c.im)
    }
}

impl<T: Element> From<Complex<T>> for num_complex::Complex<T> {
    #[inline]
    fn from(c: Complex<T>) -> Self {
        num_complex::Complex::new(c.real(), c.imaginary())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_tuple_conversion() {
        let c: Complex<i64> = (2, -7).into();
        assert_eq!(c.real(), 2);
        assert_eq!(c.imaginary(), -7);

        let (re, im): (i64, i64) = c.into();
        assert_eq!((re, im), (2, -7));
    }

    #[test]
    fn test_num_complex_conversion() {
        let c = Complex::from(Complex64::new(1.5, -0.5));
        assert_eq!(c.real(), 1.5);
        assert_eq!(c.imaginary(), -0.5);

        let back: Complex64 = c.into();
        assert_eq!(back, Complex64::new(1.5, -0.5));
    }

    #[test]
    fn test_arithmetic_agrees_with_num_complex() {
        let (a, b) = (Complex64::new(2.0, 3.0), Complex64::new(4.0, -2.0));
        let (x, y) = (Complex::from(a), Complex::from(b));

        let product: Complex64 = (x * y).into();
        assert!((product - a * b).norm() < 1e-12);

        let quotient: Complex64 = (x / y).unwrap().into();
        assert!((quotient - a / b).norm() < 1e-12);

        let cubed: Complex64 = x.power(3.0).into();
        assert!((cubed - a.powf(3.0)).norm() < 1e-9);

        assert!((x.length() - a.norm()).abs() < 1e-12);
    }
}
