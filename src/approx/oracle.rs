//! Interface to rational approximation algorithms.

use std::fmt;

use itertools::Itertools;

use super::{Interpolant, InterpolantError};

/// An algorithm that selects support points for a barycentric interpolant of
/// sampled data.
///
/// Implementations must not return an interpolant with more than `max_terms`
/// support points. Closures with the same signature implement the trait, so
/// any adaptive method can be substituted for [`Aaa`](super::Aaa).
pub trait RationalApproximator {
    fn approximate(
        &self,
        x: &[f64],
        y: &[f64],
        max_terms: usize,
    ) -> Result<Interpolant, OracleError>;
}

impl<F> RationalApproximator for F
where
    F: Fn(&[f64], &[f64], usize) -> Result<Interpolant, OracleError>,
{
    fn approximate(
        &self,
        x: &[f64],
        y: &[f64],
        max_terms: usize,
    ) -> Result<Interpolant, OracleError> {
        self(x, y, max_terms)
    }
}

/// Checks that the samples are nonempty, paired and finite.
pub fn validate_samples(x: &[f64], y: &[f64]) -> Result<(), OracleError> {
    if x.len() != y.len() {
        return Err(OracleError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    if x.is_empty() {
        return Err(OracleError::NoSamples);
    }

    if let Some(index) = x
        .iter()
        .zip(y)
        .position(|(x, y)| !(x.is_finite() && y.is_finite()))
    {
        return Err(OracleError::NonFiniteSample { index });
    }

    let duplicate = x
        .iter()
        .sorted_by(|a, b| a.total_cmp(*b))
        .tuple_windows()
        .find(|(a, b)| a == b);

    match duplicate {
        Some((&abscissa, _)) => {
            Err(OracleError::DuplicateAbscissa { abscissa })
        }
        None => Ok(()),
    }
}

/// An error resulting from a rational approximation.
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum OracleError {
    NoSamples,
    LengthMismatch { x: usize, y: usize },
    NonFiniteSample { index: usize },
    DuplicateAbscissa { abscissa: f64 },
    Decomposition { terms: usize },
    NotConverged { terms: usize, error: f64 },
    Interpolant(InterpolantError),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OracleError::NoSamples => write!(f, "no samples to approximate"),
            OracleError::LengthMismatch { x, y } => {
                write!(f, "got {x} abscissas but {y} values")
            }
            OracleError::NonFiniteSample { index } => {
                write!(f, "sample {index} is not finite")
            }
            OracleError::DuplicateAbscissa { abscissa } => {
                write!(f, "abscissa {abscissa} is sampled more than once")
            }
            OracleError::Decomposition { terms } => {
                write!(f, "decomposition failed at {terms} terms")
            }
            OracleError::NotConverged { terms, error } => {
                write!(f, "not converged after {terms} terms (error {error:e})")
            }
            OracleError::Interpolant(err) => write!(f, "{err}"),
        }
    }
}

impl From<InterpolantError> for OracleError {
    fn from(err: InterpolantError) -> Self {
        OracleError::Interpolant(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_validation() {
        assert_eq!(validate_samples(&[], &[]), Err(OracleError::NoSamples));
        assert_eq!(
            validate_samples(&[0.0, 1.0], &[0.0]),
            Err(OracleError::LengthMismatch { x: 2, y: 1 })
        );
        assert_eq!(
            validate_samples(&[0.0, f64::INFINITY], &[0.0, 1.0]),
            Err(OracleError::NonFiniteSample { index: 1 })
        );
        assert_eq!(
            validate_samples(&[0.0, 1.0, 0.0], &[0.0, 1.0, 2.0]),
            Err(OracleError::DuplicateAbscissa { abscissa: 0.0 })
        );
        assert_eq!(validate_samples(&[0.0, 1.0], &[0.0, 1.0]), Ok(()));
    }

    #[test]
    fn closures_are_oracles() {
        let fixed = |_: &[f64], _: &[f64], _: usize| {
            Interpolant::new(vec![-1.0, 1.0], vec![-1.0, 1.0], vec![1.0, -1.0])
                .map_err(OracleError::from)
        };

        let r = fixed.approximate(&[0.0], &[0.0], 2).unwrap();

        assert_eq!(r.order(), 2);
    }
}
