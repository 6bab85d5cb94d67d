//! Root value types.
//!
//! [`ComplexRoot`] is a plain real/imaginary pair and [`RootSet`] is the
//! ordered sequence a solver returns. Both are formatting-independent: how a
//! root is printed is left to the presentation layer.

use num_complex::Complex64;
use std::ops::Deref;

/// A single polynomial root as a real/imaginary pair.
///
/// An imaginary part of exactly zero marks a real root.
///
/// # Examples
/// ```
/// use roots_core::types::ComplexRoot;
///
/// let r = ComplexRoot::real(2.0);
/// assert!(r.is_real());
///
/// let z = ComplexRoot::new(0.5, 0.75);
/// assert_eq!(z.conj(), ComplexRoot::new(0.5, -0.75));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexRoot {
    /// Real component
    pub real: f64,
    /// Imaginary component (0.0 for real roots)
    pub imag: f64,
}

impl ComplexRoot {
    /// Create a root from both components.
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Create a real root.
    pub fn real(value: f64) -> Self {
        Self {
            real: value,
            imag: 0.0,
        }
    }

    /// Returns `true` when the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        self.imag == 0.0
    }

    /// Complex conjugate.
    pub fn conj(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// Modulus `|z|`.
    pub fn norm(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Closeness on both components under an absolute tolerance.
    pub fn is_close(&self, other: &ComplexRoot, tolerance: f64) -> bool {
        (self.real - other.real).abs() <= tolerance && (self.imag - other.imag).abs() <= tolerance
    }

    /// Convert to a `num_complex` value for complex arithmetic.
    pub fn to_complex(&self) -> Complex64 {
        Complex64::new(self.real, self.imag)
    }
}

impl From<Complex64> for ComplexRoot {
    fn from(z: Complex64) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<ComplexRoot> for Complex64 {
    fn from(r: ComplexRoot) -> Self {
        r.to_complex()
    }
}

impl From<f64> for ComplexRoot {
    fn from(value: f64) -> Self {
        Self::real(value)
    }
}

/// Ordered sequence of roots in discovery order.
///
/// The order is whatever the producing solver found, never sorted by
/// magnitude. Dereferences to `[ComplexRoot]`.
///
/// # Examples
/// ```
/// use roots_core::types::{ComplexRoot, RootSet};
///
/// let set = RootSet::from(vec![ComplexRoot::real(2.0), ComplexRoot::real(1.0)]);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set[0].real, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RootSet(Vec<ComplexRoot>);

impl RootSet {
    /// Create an empty root set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a root, keeping discovery order.
    pub fn push(&mut self, root: ComplexRoot) {
        self.0.push(root);
    }

    /// Number of roots that are real.
    pub fn real_count(&self) -> usize {
        self.0.iter().filter(|r| r.is_real()).count()
    }

    /// Consume the set, returning the underlying vector.
    pub fn into_vec(self) -> Vec<ComplexRoot> {
        self.0
    }
}

impl Deref for RootSet {
    type Target = [ComplexRoot];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ComplexRoot>> for RootSet {
    fn from(roots: Vec<ComplexRoot>) -> Self {
        Self(roots)
    }
}

impl FromIterator<ComplexRoot> for RootSet {
    fn from_iter<I: IntoIterator<Item = ComplexRoot>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RootSet {
    type Item = ComplexRoot;
    type IntoIter = std::vec::IntoIter<ComplexRoot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a ComplexRoot;
    type IntoIter = std::slice::Iter<'a, ComplexRoot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
