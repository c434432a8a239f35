//! Barycentric rational interpolants.

use std::fmt;

use itertools::{izip, Itertools};

use super::RationalFunction;
use crate::utils::Polynomial;

/// A rational interpolant in barycentric form,
///
/// ```text
///         Σ w_j f_j / (x - z_j)
/// r(x) = -----------------------
///           Σ w_j / (x - z_j)
/// ```
///
/// given by support points `z_j`, support values `f_j` and weights `w_j`.
#[derive(Clone, Debug)]
pub struct Interpolant {
    support_points: Vec<f64>,
    support_values: Vec<f64>,
    weights: Vec<f64>,
}

impl Interpolant {
    /// Creates an interpolant, checking that the three arrays have the same
    /// nonzero length, hold finite values, and that the support points are
    /// pairwise distinct.
    pub fn new(
        support_points: Vec<f64>,
        support_values: Vec<f64>,
        weights: Vec<f64>,
    ) -> Result<Interpolant, InterpolantError> {
        let m = support_points.len();

        if m == 0 {
            return Err(InterpolantError::new(InterpolantErrorKind::Empty));
        }

        if support_values.len() != m || weights.len() != m {
            return Err(InterpolantError::new(
                InterpolantErrorKind::LengthMismatch {
                    points: m,
                    values: support_values.len(),
                    weights: weights.len(),
                },
            ));
        }

        let non_finite = izip!(&support_points, &support_values, &weights)
            .position(|(z, f, w)| {
                !(z.is_finite() && f.is_finite() && w.is_finite())
            });

        if let Some(index) = non_finite {
            return Err(InterpolantError::new(
                InterpolantErrorKind::NonFinite { index },
            ));
        }

        let duplicate = support_points
            .iter()
            .sorted_by(|a, b| a.total_cmp(*b))
            .tuple_windows()
            .find(|(a, b)| a == b);

        if let Some((&point, _)) = duplicate {
            return Err(InterpolantError::new(
                InterpolantErrorKind::DuplicateSupportPoint { point },
            ));
        }

        Ok(Interpolant {
            support_points,
            support_values,
            weights,
        })
    }

    /// Number of support points.
    pub fn order(&self) -> usize {
        self.support_points.len()
    }

    pub fn support_points(&self) -> &[f64] {
        &self.support_points
    }

    pub fn support_values(&self) -> &[f64] {
        &self.support_values
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Evaluates the interpolant at `x`. At a support point the formula is
    /// replaced by its limit, the support value.
    pub fn eval(&self, x: f64) -> f64 {
        let mut num = 0.0;
        let mut den = 0.0;

        for (&z, &f, &w) in
            izip!(&self.support_points, &self.support_values, &self.weights)
        {
            if x == z {
                return f;
            }

            let c = w / (x - z);

            num += c * f;
            den += c;
        }

        num / den
    }
}

/// Converts a barycentric interpolant of order `m` into an explicit pair of
/// polynomials, each with `m` coefficients, whose quotient equals the
/// interpolant everywhere.
///
/// Node `j` contributes the monic polynomial vanishing on every other support
/// point, weighted by `w_j f_j` in the numerator and by `w_j` in the
/// denominator. The monomial basis is badly conditioned for large `m`; no
/// check is made here, so callers should bound the order and inspect the
/// residual afterwards.
pub fn convert_barycentric(interpolant: &Interpolant) -> RationalFunction {
    let m = interpolant.order();
    let zs = interpolant.support_points();

    let mut p = Polynomial::zero(m);
    let mut q = Polynomial::zero(m);

    let mut others = Vec::with_capacity(m.saturating_sub(1));

    for (j, (&f, &w)) in interpolant
        .support_values()
        .iter()
        .zip(interpolant.weights())
        .enumerate()
    {
        others.clear();
        others.extend_from_slice(&zs[..j]);
        others.extend_from_slice(&zs[j + 1..]);

        let term = Polynomial::from_roots(&others);

        p.add_scaled(&term, w * f);
        q.add_scaled(&term, w);
    }

    RationalFunction { p, q }
}

#[derive(Debug, PartialEq)]
pub enum InterpolantErrorKind {
    Empty,
    LengthMismatch {
        points: usize,
        values: usize,
        weights: usize,
    },
    NonFinite {
        index: usize,
    },
    DuplicateSupportPoint {
        point: f64,
    },
}

/// An invalid barycentric interpolant.
#[derive(Debug, PartialEq)]
pub struct InterpolantError {
    pub kind: InterpolantErrorKind,
}

impl InterpolantError {
    fn new(kind: InterpolantErrorKind) -> InterpolantError {
        InterpolantError { kind }
    }
}

impl fmt::Display for InterpolantError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            InterpolantErrorKind::Empty => {
                write!(f, "interpolant has no support points")
            }
            InterpolantErrorKind::LengthMismatch {
                points,
                values,
                weights,
            } => write!(
                f,
                "interpolant has {points} support points, {values} values \
                 and {weights} weights"
            ),
            InterpolantErrorKind::NonFinite { index } => {
                write!(f, "support entry {index} is not finite")
            }
            InterpolantErrorKind::DuplicateSupportPoint { point } => {
                write!(f, "support point {point} occurs more than once")
            }
        }
    }
}
