//! Magnitude-based comparisons.
//!
//! Both comparison families look only at [`Complex::length`]:
//! - complex vs complex compares the two magnitudes
//! - complex vs scalar compares the magnitude against the raw scalar
//!
//! Values with the same magnitude and different components are therefore
//! equal. This is the intended contract; componentwise checks go through
//! [`Complex::same_components`].

use crate::complex::Complex;
use crate::element::Element;
use std::cmp::Ordering;

impl<T: Element> PartialEq for Complex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }
}

impl<T: Element> PartialOrd for Complex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.length().partial_cmp(&other.length())
    }
}

impl<T: Element> PartialEq<T> for Complex<T> {
    fn eq(&self, other: &T) -> bool {
        self.length() == *other
    }
}

impl<T: Element> PartialOrd<T> for Complex<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.length().partial_cmp(other)
    }
}
