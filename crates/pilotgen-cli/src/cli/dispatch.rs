//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::defs::DefsArgs;
use crate::commands::parts::PartsArgs;

pub struct DefsParams {
    pub project: PathBuf,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl DefsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            project: required_path(m, "project"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<DefsParams> for DefsArgs {
    fn from(p: DefsParams) -> Self {
        Self {
            project: p.project,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct PartsParams {
    pub parts: PathBuf,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl PartsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            parts: required_path(m, "parts"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<PartsParams> for PartsArgs {
    fn from(p: PartsParams) -> Self {
        Self {
            parts: p.parts,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub path: PathBuf,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: required_path(m, "path"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            path: p.path,
            color: p.color.should_colorize(),
        }
    }
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id)
        .cloned()
        .expect("clap enforces required positional")
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
