//! Output formats for fitted rational functions.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::approx::RationalFunction;

/// How a fitted rational function is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Numerator and denominator coefficient arrays, highest degree first.
    #[default]
    Coefficients,
    /// Nested evaluation in `x2 = x * x`, ready to paste into source code.
    Horner,
}

impl Style {
    pub fn render(&self, r: &RationalFunction) -> Result<String, RenderError> {
        match self {
            Style::Coefficients => Ok(coefficients(r)),
            Style::Horner => horner(r),
        }
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coefficients" => Ok(Style::Coefficients),
            "horner" => Ok(Style::Horner),
            _ => Err(ParseStyleError),
        }
    }
}

#[derive(Debug)]
pub struct ParseStyleError;

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected `coefficients` or `horner`")
    }
}

fn coefficients(r: &RationalFunction) -> String {
    let list = |c: &[f64]| c.iter().map(|c| format!("{c:?}")).join(", ");

    format!(
        "p = [{}]\nq = [{}]\n",
        list(r.p.coefficients()),
        list(r.q.coefficients())
    )
}

/// Writes `x * P(x2) / Q(x2)`. Requires an odd numerator and an even
/// denominator.
fn horner(r: &RationalFunction) -> Result<String, RenderError> {
    let (p, q) = (&r.p, &r.q);

    let mut num = Vec::new();
    let mut den = Vec::new();

    // Lowest power first.
    for (i, &c) in p.coefficients().iter().enumerate().rev() {
        match p.power(i) % 2 {
            1 => num.push(c),
            _ if c != 0.0 => return Err(RenderError::NotOdd),
            _ => {}
        }
    }

    for (i, &c) in q.coefficients().iter().enumerate().rev() {
        match q.power(i) % 2 {
            0 => den.push(c),
            _ if c != 0.0 => return Err(RenderError::NotEven),
            _ => {}
        }
    }

    let num = match nested(&num) {
        Some(expr) if num.len() > 1 => format!("x * ({expr})"),
        Some(expr) => format!("x * {expr}"),
        None => "0.0".to_string(),
    };

    let den = nested(&den).unwrap_or_else(|| "0.0".to_string());

    Ok(format!("x2 = x * x\nnum = {num}\nden = {den}\n"))
}

/// Formats `c[0] + x2 * (c[1] + x2 * (...))`.
fn nested(coeffs: &[f64]) -> Option<String> {
    let (last, rest) = coeffs.split_last()?;

    let mut expr = format!("{last:?}");

    for (k, c) in rest.iter().rev().enumerate() {
        expr = if k == 0 {
            format!("{c:?} + x2 * {expr}")
        } else {
            format!("{c:?} + x2 * ({expr})")
        };
    }

    Some(expr)
}

/// A rational function without the shape a format requires.
#[derive(Debug, PartialEq)]
pub enum RenderError {
    NotOdd,
    NotEven,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenderError::NotOdd => write!(f, "numerator is not odd"),
            RenderError::NotEven => write!(f, "denominator is not even"),
        }
    }
}
