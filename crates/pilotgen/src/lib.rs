//! pilotgen: Luau type definitions from part descriptors.
//!
//! This crate provides the generation pipeline for a pilot project:
//! - `resolve` - inheritance resolution and descriptor validation
//! - `typegen` - Luau declaration rendering (part types, port globals)
//! - `assemble` - project-level `pilot.d.lua` assembly
//! - `standalone` - single-file part declarations
//! - `files` - input loading and output writing

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod assemble;
pub mod config;
pub mod files;
pub mod resolve;
pub mod standalone;
pub mod typegen;

#[cfg(test)]
mod standalone_tests;
#[cfg(test)]
pub mod test_utils;

pub use assemble::{Project, Sources, assemble};
pub use config::Config;
pub use resolve::{Generated, Resolution, generate, resolve};

/// Semantic errors in a set of part descriptors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartError {
    /// `extends` names a part that is not in the mapping.
    #[error("unknown part in extends clause of `{part}`: `{parent}`")]
    UnknownParent { part: String, parent: String },

    /// More than one part sets `default: true`.
    #[error("`{second}` and `{first}` cannot both be the default part")]
    DuplicateDefault { first: String, second: String },

    /// A part (after inheritance) declares no events.
    #[error("part `{part}` has no events")]
    EmptyEvents { part: String },

    /// An argument or event parameter entry does not hold exactly one key.
    #[error("expected exactly one entry in {location} of `{part}`, found {found}")]
    MalformedArgument {
        part: String,
        location: String,
        found: usize,
    },

    /// The `extends` chain loops back on itself.
    #[error("cyclic inheritance: {}", .chain.join(" -> "))]
    CyclicInheritance { chain: Vec<String> },
}

/// Errors that can occur while generating definitions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{}'", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Port lookups need a fallback return type.
    #[error("no part is marked as default; port lookup fallbacks need one")]
    NoDefaultPart,

    #[error(transparent)]
    Part(#[from] PartError),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
