//! Odd rational fits of sampled functions.

use std::fmt;

use super::{
    convert_barycentric, enforce_odd_even, normalize, Aaa, NormalizeError,
    OracleError, RationalApproximator, RationalFunction,
};

/// Fits an odd rational function to the samples `(x, y)` using at most
/// `max_terms` support points, with the default [`Aaa`] oracle.
pub fn fit_odd_rational(
    x: &[f64],
    y: &[f64],
    max_terms: usize,
) -> Result<RationalFunction, FitError> {
    fit_odd_rational_with(&Aaa::default(), x, y, max_terms)
}

/// Fits an odd rational function to the samples `(x, y)` using the given
/// oracle.
///
/// The numerator of the result contains only odd powers and the denominator
/// only even powers, both with as many coefficients as the oracle's
/// interpolant has support points. The numerator's leading coefficient is
/// exactly one.
pub fn fit_odd_rational_with<A>(
    oracle: &A,
    x: &[f64],
    y: &[f64],
    max_terms: usize,
) -> Result<RationalFunction, FitError>
where
    A: RationalApproximator + ?Sized,
{
    let interpolant = oracle.approximate(x, y, max_terms)?;

    log::debug!("Oracle returned {} support points", interpolant.order());

    let raw = convert_barycentric(&interpolant);
    let fit = normalize(&enforce_odd_even(&raw))?;

    log::info!(
        "Fitted odd rational of order {} to {} samples",
        interpolant.order(),
        x.len()
    );

    Ok(fit)
}

/// An error resulting from a rational fit.
#[derive(Debug, PartialEq)]
pub enum FitError {
    Oracle(OracleError),
    Normalize(NormalizeError),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FitError::Oracle(err) => write!(f, "approximation failed: {err}"),
            FitError::Normalize(err) => write!(f, "{err}"),
        }
    }
}

impl From<OracleError> for FitError {
    fn from(err: OracleError) -> Self {
        FitError::Oracle(err)
    }
}

impl From<NormalizeError> for FitError {
    fn from(err: NormalizeError) -> Self {
        FitError::Normalize(err)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::approx::Interpolant;
    use crate::functions::linspace;

    fn sine(x: &[f64], max_terms: usize) -> (RationalFunction, usize) {
        let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();
        let order = Aaa::default()
            .approximate(x, &y, max_terms)
            .unwrap()
            .order();

        (fit_odd_rational(x, &y, max_terms).unwrap(), order)
    }

    fn check_shape(fit: &RationalFunction, order: usize) {
        assert_eq!(fit.p.len(), order);
        assert_eq!(fit.q.len(), order);

        let (index, pivot) = fit.p.leading_coefficient().unwrap();

        assert_eq!(pivot, 1.0);
        assert_eq!(fit.p.power(index) % 2, 1);

        for (i, (&p, &q)) in fit
            .p
            .coefficients()
            .iter()
            .zip(fit.q.coefficients())
            .enumerate()
        {
            if fit.p.power(i) % 2 == 0 {
                assert_eq!(p, 0.0);
            } else {
                assert_eq!(q, 0.0);
            }
        }
    }

    #[test]
    fn sine_on_full_period() {
        let x = linspace(-PI, PI, 1000);
        let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();

        let (fit, order) = sine(&x, 100);

        // x^9 over x^8
        assert_eq!(order, 10);
        assert_eq!(fit.p.leading_coefficient(), Some((0, 1.0)));
        assert_ne!(fit.q[1], 0.0);

        check_shape(&fit, order);
        assert!(fit.is_finite());
        assert!(fit.max_abs_error(&x, &y) < 1e-9);

        for &t in &x {
            assert_eq!(fit.p.eval(-t), -fit.p.eval(t));
            assert_eq!(fit.q.eval(-t), fit.q.eval(t));
        }
    }

    #[test]
    fn sine_of_scaled_argument() {
        let x = linspace(-0.5, 0.5, 600);
        let y: Vec<f64> = x.iter().map(|x| (2.0 * PI * x).sin()).collect();

        let interpolant = Aaa::default().approximate(&x, &y, 100).unwrap();
        let fit = fit_odd_rational(&x, &y, 100).unwrap();

        assert_eq!(interpolant.order(), 10);
        assert_eq!(fit.p.leading_coefficient(), Some((0, 1.0)));

        check_shape(&fit, interpolant.order());
        assert!(fit.max_abs_error(&x, &y) < 1e-9);
    }

    #[test]
    fn sine_with_capped_order() {
        let x = linspace(-PI, PI, 1000);
        let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();

        let (fit, order) = sine(&x, 8);

        // x^7 over x^6
        assert_eq!(order, 8);
        assert_eq!(fit.p.leading_coefficient(), Some((0, 1.0)));

        check_shape(&fit, order);
        assert!(fit.max_abs_error(&x, &y) < 1e-8);
    }

    #[test]
    fn custom_oracle() {
        let linear = |_: &[f64], _: &[f64], _: usize| {
            Interpolant::new(vec![-1.0, 1.0], vec![-1.0, 1.0], vec![1.0, -1.0])
                .map_err(OracleError::from)
        };

        let fit = fit_odd_rational_with(&linear, &[-1.0, 1.0], &[-1.0, 1.0], 2)
            .unwrap();

        assert_eq!(fit.p.coefficients(), &[1.0, 0.0]);
        assert_eq!(fit.q.coefficients(), &[0.0, 1.0]);
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(
            fit_odd_rational(&[0.0], &[], 10),
            Err(FitError::Oracle(OracleError::LengthMismatch { x: 1, y: 0 }))
        );

        let constant = |_: &[f64], _: &[f64], _: usize| {
            Interpolant::new(vec![0.0], vec![0.0], vec![1.0])
                .map_err(OracleError::from)
        };

        assert_eq!(
            fit_odd_rational_with(&constant, &[0.0], &[0.0], 1),
            Err(FitError::Normalize(NormalizeError::Degenerate { pivot: 0.0 }))
        );

        let x = linspace(-PI, PI, 100);
        let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();

        assert!(matches!(
            fit_odd_rational_with(&Aaa::default().strict(), &x, &y, 2),
            Err(FitError::Oracle(OracleError::NotConverged { terms: 2, .. }))
        ));
    }
}
