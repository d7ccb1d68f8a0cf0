//! Project-level definitions file.
//!
//! A pilot project directory holds two hand-written fragments and the part
//! descriptors:
//!
//! ```text
//! project/
//!   types.d.lua      (copied verbatim)
//!   globals.d.lua    (copied verbatim)
//!   parts.json
//!   build/pilot.d.lua  (generated)
//! ```

use std::path::{Path, PathBuf};

use pilotgen_core::RawParts;
use tracing::debug;

use crate::files::{read_parts, read_text, write_output};
use crate::typegen::luau::emit_port_globals;
use crate::{Config, Error, Result, generate};

pub const TYPES_FILE: &str = "types.d.lua";
pub const GLOBALS_FILE: &str = "globals.d.lua";
pub const PARTS_FILE: &str = "parts.json";
pub const BUILD_DIR: &str = "build";
pub const OUTPUT_FILE: &str = "pilot.d.lua";

const PART_TYPES_HEADER: &str = "-- Part Types";
const PORT_GLOBALS_HEADER: &str = "-- Port-related microcontroller globals";

/// Everything read from a project before generation starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sources {
    pub types: String,
    pub globals: String,
    pub parts: RawParts,
}

/// A pilot project directory.
#[derive(Clone, Debug)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn types_path(&self) -> PathBuf {
        self.root.join(TYPES_FILE)
    }

    pub fn globals_path(&self) -> PathBuf {
        self.root.join(GLOBALS_FILE)
    }

    pub fn parts_path(&self) -> PathBuf {
        self.root.join(PARTS_FILE)
    }

    /// `build/pilot.d.lua` under the project root.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(BUILD_DIR).join(OUTPUT_FILE)
    }

    /// Read both fragments and the part descriptors.
    pub fn load(&self) -> Result<Sources> {
        debug!(root = %self.root.display(), "loading project");
        Ok(Sources {
            types: read_text(&self.types_path())?,
            parts: read_parts(&self.parts_path())?,
            globals: read_text(&self.globals_path())?,
        })
    }

    /// Load the project and assemble the full definitions text.
    pub fn build(&self, config: &Config) -> Result<String> {
        assemble(&self.load()?, config)
    }

    /// Build and write to `output` (the project's default output path when `None`).
    ///
    /// Nothing is created on disk unless generation succeeds.
    pub fn build_and_write(&self, config: &Config, output: Option<&Path>) -> Result<PathBuf> {
        let content = self.build(config)?;
        let path = output.map_or_else(|| self.output_path(), Path::to_path_buf);
        write_output(&path, &content)?;
        Ok(path)
    }
}

/// Concatenate fragments, part types, and port globals.
///
/// Order: types fragment, part types, globals fragment, port globals. Each
/// block is trimmed; afterwards every doubled newline is collapsed once.
pub fn assemble(sources: &Sources, config: &Config) -> Result<String> {
    let generated = generate(&sources.parts, config)?;
    let Some(default_part) = generated.default_part.as_deref() else {
        return Err(Error::NoDefaultPart);
    };
    let part_names: Vec<&str> = generated.part_names().collect();

    let mut content = String::new();
    push_block(&mut content, &sources.types);
    push_block(&mut content, PART_TYPES_HEADER);
    push_block(&mut content, &generated.render());
    push_block(&mut content, &sources.globals);
    push_block(&mut content, PORT_GLOBALS_HEADER);
    content.push_str(&emit_port_globals(&part_names, default_part, config));

    Ok(normalize(&content))
}

fn push_block(content: &mut String, block: &str) {
    content.push_str(block.trim());
    content.push('\n');
}

/// Trim, collapse `\n\n` to `\n` in a single left-to-right pass, end with one newline.
pub(crate) fn normalize(content: &str) -> String {
    let mut out = content.trim().replace("\n\n", "\n");
    out.push('\n');
    out
}
