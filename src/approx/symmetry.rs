//! Parity enforcement and normalization of rational approximations.

use std::fmt;

use super::RationalFunction;

/// Forces the shape of an odd rational function: only odd powers survive in
/// the numerator and only even powers in the denominator. Lengths are kept.
pub fn enforce_odd_even(r: &RationalFunction) -> RationalFunction {
    RationalFunction {
        p: r.p.keep_odd(),
        q: r.q.keep_even(),
    }
}

/// Rescales both polynomials so the leading coefficient of the numerator is
/// exactly one, leaving the quotient unchanged.
///
/// The pivot is the coefficient of the highest power present in `p`. For an
/// odd numerator of even length that is `p[0]`; when the nominal degree is
/// even, the masked top coefficient is skipped in favor of the next one.
pub fn normalize(
    r: &RationalFunction,
) -> Result<RationalFunction, NormalizeError> {
    let Some((index, pivot)) = r.p.leading_coefficient() else {
        return Err(NormalizeError::Degenerate { pivot: 0.0 });
    };

    if !pivot.is_finite() {
        return Err(NormalizeError::Degenerate { pivot });
    }

    log::debug!("Normalizing by p[{index}] = {pivot:e}");

    Ok(RationalFunction {
        p: &r.p / pivot,
        q: &r.q / pivot,
    })
}

/// A normalization without a usable pivot.
#[derive(Debug, PartialEq)]
pub enum NormalizeError {
    Degenerate { pivot: f64 },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NormalizeError::Degenerate { pivot } => {
                write!(f, "cannot normalize by leading coefficient {pivot}")
            }
        }
    }
}
