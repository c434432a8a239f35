use std::path::PathBuf;

use argh::FromArgs;
use log::LevelFilter;

use crate::format::Style;
use crate::functions::Target;

/// Odd rational approximations of sine for DSP code.
#[derive(FromArgs)]
pub struct Opts {
    /// function to approximate (sin, sin2pi)
    #[argh(option, default = "Default::default()")]
    pub target: Target,

    /// maximum number of support points
    #[argh(option, default = "100")]
    pub max_terms: usize,

    /// number of samples over the target's interval
    #[argh(option)]
    pub samples: Option<usize>,

    /// substitute `k * x` for `x` in the result
    #[argh(option)]
    pub scale: Option<f64>,

    /// output style (coefficients, horner)
    #[argh(option, default = "Default::default()")]
    pub style: Style,

    /// output file
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }

    pub fn samples(&self) -> usize {
        self.samples.unwrap_or_else(|| self.target.default_samples())
    }
}
