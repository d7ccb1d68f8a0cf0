use std::path::{Path, PathBuf};

use pilotgen::files::read_parts;
use pilotgen::{Config, Project, resolve};
use tracing::info;

use super::report::fail;

pub struct CheckArgs {
    pub path: PathBuf,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(e) = check(&args.path) {
        fail(&e, args.color);
    }

    // Silent on success (like cargo check)
}

/// Validate a descriptor file, or a whole project directory including its fragments.
pub fn check(path: &Path) -> pilotgen::Result<()> {
    if path.is_dir() {
        Project::new(path).build(&Config::default())?;
    } else {
        let resolution = resolve(&read_parts(path)?)?;
        info!(parts = resolution.parts.len(), "descriptors are valid");
    }
    Ok(())
}
