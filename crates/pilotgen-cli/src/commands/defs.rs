use std::path::PathBuf;

use pilotgen::{Config, Project};

use super::report::fail;

pub struct DefsArgs {
    pub project: PathBuf,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: DefsArgs) {
    let project = Project::new(args.project);

    match project.build_and_write(&Config::default(), args.output.as_deref()) {
        Ok(path) => println!("{} created successfully", path.display()),
        Err(e) => fail(&e, args.color),
    }
}
