//! Dense real polynomials in monomial form.

use std::ops::{Div, Index};

/// A real polynomial in monomial form.
///
/// Coefficients are stored highest degree first: in a polynomial of length
/// `n`, `coeffs[i]` multiplies `x^(n - 1 - i)` and the last entry is the
/// constant term. The length fixes the nominal degree. Leading zeros are never
/// trimmed, so every transformation returns a polynomial of the same length as
/// its input.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Wraps a coefficient vector, highest degree first.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs` is empty.
    pub fn new(coeffs: Vec<f64>) -> Polynomial {
        assert!(!coeffs.is_empty());

        Polynomial { coeffs }
    }

    /// The zero polynomial with `len` coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn zero(len: usize) -> Polynomial {
        Polynomial::new(vec![0.0; len])
    }

    /// Expands the monic polynomial `(x - r_0)(x - r_1)...` with the given
    /// roots. The result has `roots.len() + 1` coefficients.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oddrat::utils::Polynomial;
    /// #
    /// let p = Polynomial::from_roots(&[1.0, 2.0]);
    ///
    /// assert_eq!(p.coefficients(), &[1.0, -3.0, 2.0]);
    /// ```
    pub fn from_roots(roots: &[f64]) -> Polynomial {
        let mut coeffs = Vec::with_capacity(roots.len() + 1);
        coeffs.push(1.0);

        for &root in roots {
            // Convolve with [1, -root].
            coeffs.push(0.0);

            for i in (1..coeffs.len()).rev() {
                coeffs[i] -= root * coeffs[i - 1];
            }
        }

        Polynomial { coeffs }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coeffs
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the power of `x` multiplied by the coefficient at `index`.
    pub fn power(&self, index: usize) -> usize {
        self.degree() - index
    }

    /// Evaluates the polynomial at `x` by Horner's method.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Adds `factor * other` to `self` coefficient-wise.
    ///
    /// # Panics
    ///
    /// Panics if the polynomials differ in length.
    pub fn add_scaled(&mut self, other: &Polynomial, factor: f64) {
        assert_eq!(self.len(), other.len());

        for (c, &o) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *c += factor * o;
        }
    }

    /// Returns a copy with every even-power coefficient set to zero, leaving
    /// an odd polynomial.
    pub fn keep_odd(&self) -> Polynomial {
        self.keep_parity(1)
    }

    /// Returns a copy with every odd-power coefficient set to zero, leaving
    /// an even polynomial.
    pub fn keep_even(&self) -> Polynomial {
        self.keep_parity(0)
    }

    fn keep_parity(&self, parity: usize) -> Polynomial {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| if self.power(i) % 2 == parity { c } else { 0.0 })
            .collect();

        Polynomial { coeffs }
    }

    /// Returns the index and value of the coefficient of the highest power
    /// present, i.e. the first coefficient that is not exactly zero.
    pub fn leading_coefficient(&self) -> Option<(usize, f64)> {
        self.coeffs
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, c)| c != 0.0)
    }

    /// Returns the polynomial `x ↦ self(k * x)`.
    pub fn scale_argument(&self, k: f64) -> Polynomial {
        let mut factor = 1.0;

        let mut coeffs: Vec<_> = self
            .coeffs
            .iter()
            .rev()
            .map(|&c| {
                let scaled = c * factor;
                factor *= k;
                scaled
            })
            .collect();

        coeffs.reverse();

        Polynomial { coeffs }
    }

    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }
}

impl Index<usize> for Polynomial {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coeffs[index]
    }
}

/// Divides every coefficient by `rhs`. Coefficients that are exactly zero
/// stay `0.0` whatever the sign of `rhs`.
impl Div<f64> for &Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: f64) -> Polynomial {
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| if c == 0.0 { 0.0 } else { c / rhs })
            .collect();

        Polynomial { coeffs }
    }
}

impl Div<f64> for Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: f64) -> Polynomial {
        &self / rhs
    }
}
