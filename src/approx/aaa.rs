//! The AAA algorithm (Nakatsukasa, Sète and Trefethen, 2018).
//!
//! Support points are chosen greedily where the current approximation is
//! worst. With the support points fixed, the weights minimize the linearized
//! residual over the remaining samples, which amounts to taking the right
//! singular vector of the smallest singular value of a Loewner matrix.

use nalgebra::DMatrix;

use super::oracle::{validate_samples, OracleError, RationalApproximator};
use super::Interpolant;

/// Adaptive Antoulas-Anderson rational approximation.
#[derive(Clone, Copy, Debug)]
pub struct Aaa {
    /// Target error relative to the largest sample magnitude.
    pub rtol: f64,
    /// Fail instead of warning when the term limit is reached first.
    pub strict: bool,
}

impl Aaa {
    pub fn with_tolerance(rtol: f64) -> Aaa {
        Aaa {
            rtol,
            ..Default::default()
        }
    }

    pub fn strict(self) -> Aaa {
        Aaa {
            strict: true,
            ..self
        }
    }
}

impl Default for Aaa {
    fn default() -> Self {
        Aaa {
            rtol: f64::EPSILON.powf(0.75),
            strict: false,
        }
    }
}

impl RationalApproximator for Aaa {
    fn approximate(
        &self,
        x: &[f64],
        y: &[f64],
        max_terms: usize,
    ) -> Result<Interpolant, OracleError> {
        validate_samples(x, y)?;

        let n = x.len();
        let max_terms = max_terms.min(n);
        let scale = y.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()));
        let tol = self.rtol * scale;

        let mean = y.iter().sum::<f64>() / n as f64;
        let mut residual: Vec<f64> =
            y.iter().map(|v| (v - mean).abs()).collect();

        let mut is_support = vec![false; n];
        let mut support: Vec<usize> = Vec::with_capacity(max_terms);
        let mut weights: Vec<f64> = Vec::new();
        let mut error = f64::INFINITY;

        while support.len() < max_terms {
            let Some(next) = (0..n)
                .filter(|&i| !is_support[i])
                .max_by(|&a, &b| residual[a].total_cmp(&residual[b]))
            else {
                break;
            };

            is_support[next] = true;
            residual[next] = 0.0;
            support.push(next);

            let rest: Vec<usize> = (0..n).filter(|&i| !is_support[i]).collect();

            weights = if rest.is_empty() {
                // Every sample is a support point, so any nonzero weights
                // interpolate exactly.
                lagrange_weights(x, &support)
            } else {
                loewner_weights(x, y, &support, &rest)?
            };

            error = 0.0;

            for &i in &rest {
                let (num, den) = support.iter().zip(&weights).fold(
                    (0.0, 0.0),
                    |(num, den), (&j, &w)| {
                        let c = w / (x[i] - x[j]);
                        (num + c * y[j], den + c)
                    },
                );

                let err = (y[i] - num / den).abs();

                residual[i] = if err.is_nan() { f64::INFINITY } else { err };
                error = error.max(residual[i]);
            }

            log::debug!("AAA: {} terms, error {error:e}", support.len());

            if error <= tol {
                break;
            }
        }

        if error > tol {
            if self.strict {
                return Err(OracleError::NotConverged {
                    terms: support.len(),
                    error,
                });
            }

            log::warn!(
                "AAA stopped at {} terms, error {error:e} > {tol:e}",
                support.len()
            );
        }

        let support_points = support.iter().map(|&j| x[j]).collect();
        let support_values = support.iter().map(|&j| y[j]).collect();

        Interpolant::new(support_points, support_values, weights)
            .map_err(OracleError::from)
    }
}

/// Weights from the null space of the Loewner matrix
/// `L[i, k] = (y_i - y_k) / (x_i - x_k)` over non-support rows `i`.
fn loewner_weights(
    x: &[f64],
    y: &[f64],
    support: &[usize],
    rest: &[usize],
) -> Result<Vec<f64>, OracleError> {
    let terms = support.len();

    // Zero rows pad a wide matrix to square so the null vector is kept.
    let rows = rest.len().max(terms);

    let loewner = DMatrix::from_fn(rows, terms, |r, k| match rest.get(r) {
        Some(&i) => {
            let j = support[k];
            (y[i] - y[j]) / (x[i] - x[j])
        }
        None => 0.0,
    });

    let svd = loewner
        .try_svd(false, true, f64::EPSILON, 0)
        .ok_or(OracleError::Decomposition { terms })?;

    let v_t = svd.v_t.ok_or(OracleError::Decomposition { terms })?;

    let smallest = svd
        .singular_values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(k, _)| k)
        .ok_or(OracleError::Decomposition { terms })?;

    Ok(v_t.row(smallest).iter().copied().collect())
}

fn lagrange_weights(x: &[f64], support: &[usize]) -> Vec<f64> {
    support
        .iter()
        .map(|&j| {
            support
                .iter()
                .filter(|&&k| k != j)
                .map(|&k| x[j] - x[k])
                .product::<f64>()
                .recip()
        })
        .collect()
}
