use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use oddrat::approx::{self, NormalizeError, RationalFunction};
use oddrat::opts::Opts;

fn write_output(
    text: &str,
    error: f64,
    file: &Option<PathBuf>,
) -> io::Result<()> {
    let mut out: Box<dyn io::Write> = if let Some(path) = file {
        Box::new(File::create(path)?)
    } else {
        Box::new(io::stdout())
    };

    write!(out, "{text}")?;
    writeln!(out, "max abs error = {error:e}")
}

/// Substitutes `k * x` for the argument of `fit`. Also returns the sample
/// abscissas mapped into the rescaled variable.
fn rescale(
    fit: RationalFunction,
    x: Vec<f64>,
    k: Option<f64>,
) -> Result<(RationalFunction, Vec<f64>), NormalizeError> {
    match k {
        Some(k) => Ok((
            approx::normalize(&fit.scale_argument(k))?,
            x.iter().map(|x| x / k).collect(),
        )),
        None => Ok((fit, x)),
    }
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .init();

    let (x, y) = opts.target.sample(opts.samples());

    log::info!("Sampled {} at {} points", opts.target, x.len());

    let fit = match approx::fit_odd_rational(&x, &y, opts.max_terms) {
        Ok(fit) => fit,
        Err(err) => {
            eprintln!("error: {err}");

            return ExitCode::FAILURE;
        }
    };

    let (fit, x) = match rescale(fit, x, opts.scale) {
        Ok(rescaled) => rescaled,
        Err(err) => {
            eprintln!("error: {err}");

            return ExitCode::FAILURE;
        }
    };

    let error = fit.max_abs_error(&x, &y);

    if !error.is_finite() {
        log::warn!("Fit is not finite on the sampled interval");
    }

    let text = match opts.style.render(&fit) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");

            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = write_output(&text, error, &opts.output) {
        eprintln!("error: {err}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
