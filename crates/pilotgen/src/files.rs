//! Filesystem access for generator inputs and outputs.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use pilotgen_core::{RawParts, parse_parts};
use tracing::{debug, info};

use crate::{Error, Result};

/// Read a text input; a missing file is reported as [`Error::MissingFile`].
pub fn read_text(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading");
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::MissingFile {
            path: path.to_path_buf(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read and parse a `parts.json` file.
pub fn read_parts(path: &Path) -> Result<RawParts> {
    let json = read_text(path)?;
    parse_parts(&json).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path` in one pass, creating the parent directory if absent.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.is_dir() {
            fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "wrote definitions");
    Ok(())
}
