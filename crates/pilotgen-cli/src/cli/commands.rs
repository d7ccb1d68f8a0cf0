//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the diagnostics flags every command accepts.
fn with_diagnostic_args(cmd: Command) -> Command {
    cmd.arg(color_arg()).arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("pilotgen")
        .about("Luau type definitions for pilot part descriptors")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(defs_command())
        .subcommand(parts_command())
        .subcommand(check_command())
}

/// Generate the full definitions file for a project.
pub fn defs_command() -> Command {
    let cmd = Command::new("defs")
        .about("Generate build/pilot.d.lua for a project")
        .override_usage("  pilotgen defs <PROJECT> [-o <FILE>]")
        .after_help(
            r#"EXAMPLES:
  pilotgen defs .                     # writes ./build/pilot.d.lua
  pilotgen defs game/ -o out.d.lua    # custom output file
  PILOTGEN_LOG=debug pilotgen defs .  # trace part resolution"#,
        )
        .arg(project_path_arg())
        .arg(output_file_arg());

    with_diagnostic_args(cmd)
}

/// Generate part declarations from a single descriptor file.
pub fn parts_command() -> Command {
    let cmd = Command::new("parts")
        .about("Generate part declarations from a descriptor file")
        .override_usage("  pilotgen parts <FILE> [-o <FILE>]")
        .after_help(
            r#"EXAMPLES:
  pilotgen parts parts.json                 # writes parts.d.lua
  pilotgen parts parts.json -o types.d.lua  # custom output file"#,
        )
        .arg(parts_path_arg())
        .arg(output_file_arg());

    with_diagnostic_args(cmd)
}

/// Validate part descriptors without writing anything.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate part descriptors")
        .override_usage("  pilotgen check <PATH>")
        .after_help(
            r#"EXAMPLES:
  pilotgen check parts.json   # descriptors only
  pilotgen check game/        # whole project, including fragments"#,
        )
        .arg(check_path_arg());

    with_diagnostic_args(cmd)
}
