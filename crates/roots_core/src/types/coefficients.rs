//! Degree selector and validated coefficient vector.

use super::error::SolveError;
use std::fmt;

/// Polynomial degree supported by the dispatcher.
///
/// # Examples
/// ```
/// use roots_core::types::Degree;
///
/// let degree = Degree::try_from(3).unwrap();
/// assert_eq!(degree, Degree::Cubic);
/// assert_eq!(degree.coefficient_count(), 4);
/// assert!(Degree::try_from(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Degree {
    /// ax + b
    Linear,
    /// ax² + bx + c
    Quadratic,
    /// ax³ + bx² + cx + d
    Cubic,
    /// ax⁴ + bx³ + cx² + dx + e
    Quartic,
}

impl Degree {
    /// All supported degrees in ascending order.
    pub const ALL: [Degree; 4] = [
        Degree::Linear,
        Degree::Quadratic,
        Degree::Cubic,
        Degree::Quartic,
    ];

    /// Numeric order of the polynomial.
    pub fn order(&self) -> usize {
        match self {
            Degree::Linear => 1,
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
            Degree::Quartic => 4,
        }
    }

    /// Number of coefficients a polynomial of this degree carries.
    pub fn coefficient_count(&self) -> usize {
        self.order() + 1
    }

    /// Lowercase name of the degree.
    pub fn name(&self) -> &'static str {
        match self {
            Degree::Linear => "linear",
            Degree::Quadratic => "quadratic",
            Degree::Cubic => "cubic",
            Degree::Quartic => "quartic",
        }
    }
}

impl TryFrom<usize> for Degree {
    type Error = SolveError;

    fn try_from(order: usize) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(Degree::Linear),
            2 => Ok(Degree::Quadratic),
            3 => Ok(Degree::Cubic),
            4 => Ok(Degree::Quartic),
            other => Err(SolveError::UnsupportedDegree(other)),
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (degree {})", self.name(), self.order())
    }
}

/// Validated coefficients of one polynomial, highest degree first.
///
/// Construction enforces every invariant the solvers rely on: the count
/// matches the degree, every value is finite, and the leading coefficient is
/// non-zero. There are no implicit defaults; every coefficient is supplied
/// by the caller.
///
/// # Examples
/// ```
/// use roots_core::types::{Coefficients, Degree};
///
/// let coeffs = Coefficients::new(Degree::Linear, &[2.0, -4.0]).unwrap();
/// assert_eq!(coeffs.leading(), 2.0);
/// assert_eq!(coeffs.evaluate(2.0), 0.0);
///
/// let inferred = Coefficients::from_slice(&[1.0, 0.0, -1.0]).unwrap();
/// assert_eq!(inferred.degree(), Degree::Quadratic);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    degree: Degree,
    values: Vec<f64>,
}

impl Coefficients {
    /// Validate `values` as the coefficients of a polynomial of `degree`.
    ///
    /// # Errors
    ///
    /// * `SolveError::CoefficientCountMismatch` - `values.len() != degree + 1`
    /// * `SolveError::NonFiniteCoefficient` - a value is NaN or infinite
    /// * `SolveError::InvalidLeadingCoefficient` - `values[0] == 0.0`
    pub fn new(degree: Degree, values: &[f64]) -> Result<Self, SolveError> {
        let expected = degree.coefficient_count();
        if values.len() != expected {
            return Err(SolveError::CoefficientCountMismatch {
                degree,
                expected,
                got: values.len(),
            });
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SolveError::NonFiniteCoefficient {
                index,
                value: values[index],
            });
        }

        if values[0] == 0.0 {
            return Err(SolveError::InvalidLeadingCoefficient { degree });
        }

        Ok(Self {
            degree,
            values: values.to_vec(),
        })
    }

    /// Validate `values`, inferring the degree from the coefficient count.
    ///
    /// # Errors
    ///
    /// * `SolveError::UnsupportedDegree` - fewer than 2 or more than 5 values
    /// * Any error of [`Coefficients::new`]
    pub fn from_slice(values: &[f64]) -> Result<Self, SolveError> {
        let degree = Degree::try_from(values.len().saturating_sub(1))?;
        Self::new(degree, values)
    }

    /// Degree of the polynomial.
    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// Coefficients, highest degree first.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Leading (highest-degree) coefficient; never zero.
    pub fn leading(&self) -> f64 {
        self.values[0]
    }

    /// Evaluate the polynomial at a real point.
    pub fn evaluate(&self, x: f64) -> f64 {
        crate::math::polynomial::horner(&self.values, x)
    }
}
