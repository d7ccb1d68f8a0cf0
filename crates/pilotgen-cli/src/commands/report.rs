//! Error reporting for command handlers.

use std::error::Error as _;

use pilotgen::Error;
use pilotgen_core::Colors;

/// Render an error for stderr.
///
/// Input problems (missing file, malformed JSON) are reported as-is.
/// Everything else is a generation failure and lists its whole cause chain.
pub fn render_error(err: &Error, colors: Colors) -> String {
    let c = colors;
    match err {
        Error::MissingFile { .. } | Error::Json { .. } => {
            format!("{}error{}: {}\n", c.red, c.reset, err)
        }
        _ => {
            let mut out = format!("{}error{}: failed to generate: {}\n", c.red, c.reset, err);
            let mut source = err.source();
            while let Some(cause) = source {
                out.push_str(&format!("  {}caused by{}: {}\n", c.dim, c.reset, cause));
                source = cause.source();
            }
            out
        }
    }
}

/// Print `err` to stderr and exit with status 1.
pub fn fail(err: &Error, color: bool) -> ! {
    eprint!("{}", render_error(err, Colors::new(color)));
    std::process::exit(1);
}
