//! Target functions and their sampling domains.

use std::f64::consts::PI;

use strum_macros::{Display, EnumString};

/// An odd function to approximate, together with the interval it is sampled
/// over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Target {
    /// `sin(x)` on `[-π, π]`.
    #[default]
    Sin,
    /// `sin(2πx)` on `[-0.5, 0.5]`.
    Sin2Pi,
}

impl Target {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Target::Sin => x.sin(),
            Target::Sin2Pi => (2.0 * PI * x).sin(),
        }
    }

    pub fn interval(self) -> (f64, f64) {
        match self {
            Target::Sin => (-PI, PI),
            Target::Sin2Pi => (-0.5, 0.5),
        }
    }

    pub fn default_samples(self) -> usize {
        match self {
            Target::Sin => 1000,
            Target::Sin2Pi => 600,
        }
    }

    /// Samples the function at `n` evenly spaced points spanning its
    /// interval, endpoints included.
    pub fn sample(self, n: usize) -> (Vec<f64>, Vec<f64>) {
        let (left, right) = self.interval();
        let x = linspace(left, right, n);
        let y = x.iter().map(|&x| self.eval(x)).collect();

        (x, y)
    }
}

/// Returns `n` evenly spaced points from `a` to `b` inclusive.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;

            (0..n)
                .map(|i| if i == n - 1 { b } else { a + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_names() {
        assert_eq!("sin".parse::<Target>(), Ok(Target::Sin));
        assert_eq!("sin2pi".parse::<Target>(), Ok(Target::Sin2Pi));
        assert!("cos".parse::<Target>().is_err());
        assert_eq!(Target::Sin2Pi.to_string(), "sin2pi");
    }

    #[test]
    fn sampling() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let (x, y) = Target::Sin2Pi.sample(600);

        assert_eq!(x.len(), 600);
        assert_eq!(x[0], -0.5);
        assert_eq!(x[599], 0.5);
        assert_eq!(y[0], Target::Sin2Pi.eval(-0.5));
    }
}
