//! Part declarations for a single descriptor file.
//!
//! Unlike [`crate::assemble`], no fragments or port globals are added: the
//! output is the pragma line followed by the part types only.

use std::path::{Path, PathBuf};

use pilotgen_core::RawParts;

use crate::files::{read_parts, write_output};
use crate::{Config, PartError, Result, generate};

/// Extension of generated declaration files.
pub const DECLARATION_EXTENSION: &str = "d.lua";

/// Sibling of `input` with the same stem: `parts.json` -> `parts.d.lua`.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(DECLARATION_EXTENSION)
}

/// Pragma line followed by every part declaration.
pub fn render(parts: &RawParts, config: &Config) -> std::result::Result<String, PartError> {
    let generated = generate(parts, config)?;
    Ok(format!("{}\n{}", config.pragma, generated.render()))
}

/// Generate declarations for `input` and write them to `output`
/// (the sibling `.d.lua` file when `None`).
pub fn generate_file(input: &Path, output: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let parts = read_parts(input)?;
    let content = render(&parts, config)?;
    let path = output.map_or_else(|| output_path_for(input), Path::to_path_buf);
    write_output(&path, &content)?;
    Ok(path)
}
