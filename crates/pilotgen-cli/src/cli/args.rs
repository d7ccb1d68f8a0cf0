//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Project directory (positional).
pub fn project_path_arg() -> Arg {
    Arg::new("project")
        .value_name("PROJECT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Project directory containing types.d.lua, globals.d.lua and parts.json")
}

/// Part descriptor file (positional).
pub fn parts_path_arg() -> Arg {
    Arg::new("parts")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Part descriptor JSON file")
}

/// Part descriptor file or project directory (positional).
pub fn check_path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Part descriptor JSON file or project directory")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file instead of the default location")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for progress, -vv for resolution details)")
}
