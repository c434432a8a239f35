//! Rational approximation of odd functions.
//!
//! A fit runs in three stages: an [oracle](RationalApproximator) produces a
//! barycentric interpolant of the samples, [`convert_barycentric`] expands it
//! into a numerator and denominator in monomial form, and
//! [`enforce_odd_even`] followed by [`normalize`] cleans the pair up into an
//! odd-over-even formula with a unit leading coefficient.

pub mod aaa;
pub mod barycentric;
pub mod fit;
pub mod oracle;
pub mod symmetry;

pub use aaa::Aaa;
pub use barycentric::{
    convert_barycentric, Interpolant, InterpolantError, InterpolantErrorKind,
};
pub use fit::{fit_odd_rational, fit_odd_rational_with, FitError};
pub use oracle::{OracleError, RationalApproximator};
pub use symmetry::{enforce_odd_even, normalize, NormalizeError};

use crate::utils::Polynomial;

/// A rational function `p(x) / q(x)`.
#[derive(Clone, Debug, PartialEq)]
pub struct RationalFunction {
    pub p: Polynomial,
    pub q: Polynomial,
}

impl RationalFunction {
    pub fn eval(&self, x: f64) -> f64 {
        self.p.eval(x) / self.q.eval(x)
    }

    /// Maximum absolute deviation from the samples `(x, y)`.
    ///
    /// Returns NaN if any evaluation is NaN, so a non-finite fit is never
    /// reported as accurate.
    pub fn max_abs_error(&self, x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y)
            .map(|(&x, &y)| (self.eval(x) - y).abs())
            .fold(0.0, |acc: f64, err| {
                if acc.is_nan() || err.is_nan() {
                    f64::NAN
                } else {
                    acc.max(err)
                }
            })
    }

    /// Returns the rational function `x ↦ self(k * x)`.
    pub fn scale_argument(&self, k: f64) -> RationalFunction {
        RationalFunction {
            p: self.p.scale_argument(k),
            q: self.q.scale_argument(k),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.p.is_finite() && self.q.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_against_samples() {
        let r = RationalFunction {
            p: Polynomial::new(vec![1.0, 0.0]),
            q: Polynomial::new(vec![0.0, 1.0]),
        };

        assert_eq!(r.max_abs_error(&[0.0, 1.0, 2.0], &[0.0, 1.5, 2.25]), 0.5);
        assert_eq!(r.max_abs_error(&[], &[]), 0.0);

        let broken = RationalFunction {
            q: Polynomial::new(vec![0.0, 0.0]),
            ..r
        };

        assert!(broken.max_abs_error(&[0.0, 1.0], &[0.0, 1.0]).is_nan());
    }

    #[test]
    fn argument_scaling() {
        let r = RationalFunction {
            p: Polynomial::new(vec![1.0, 0.0, 2.0, 0.0]),
            q: Polynomial::new(vec![0.0, 3.0, 0.0, 1.0]),
        };
        let scaled = r.scale_argument(0.5);

        for x in [-2.0, -1.0, 0.5, 4.0] {
            assert_eq!(scaled.eval(x), r.eval(0.5 * x));
        }
    }
}
