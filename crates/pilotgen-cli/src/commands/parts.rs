use std::path::PathBuf;

use pilotgen::Config;
use pilotgen::standalone::generate_file;

use super::report::fail;

pub struct PartsArgs {
    pub parts: PathBuf,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: PartsArgs) {
    match generate_file(&args.parts, args.output.as_deref(), &Config::default()) {
        Ok(path) => println!("{} created successfully", path.display()),
        Err(e) => fail(&e, args.color),
    }
}
