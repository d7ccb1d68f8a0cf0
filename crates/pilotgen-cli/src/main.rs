mod cli;
mod commands;
mod logging;

#[cfg(test)]
mod logging_tests;

use cli::{CheckParams, DefsParams, PartsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("defs", m)) => {
            let params = DefsParams::from_matches(m);
            logging::init(params.verbose);
            commands::defs::run(params.into());
        }
        Some(("parts", m)) => {
            let params = PartsParams::from_matches(m);
            logging::init(params.verbose);
            commands::parts::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.verbose);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
