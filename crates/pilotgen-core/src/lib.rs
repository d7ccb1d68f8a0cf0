#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for pilotgen part descriptors.
//!
//! This is the deserialization layer: a 1:1 mapping to `parts.json`.
//! Shape checks that JSON cannot express (single-key argument entries,
//! inheritance, default uniqueness) belong to the resolver in `pilotgen`.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

pub mod colors;

pub use colors::Colors;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// All part descriptors in `parts.json`, in file order.
pub type RawParts = IndexMap<String, RawPart>;

/// One `name: type` pair as written in JSON: `{"speed": "number"}`.
///
/// Expected to hold exactly one entry. Kept as a map so that malformed
/// entries survive deserialization and can be reported with context.
pub type RawEntry = IndexMap<String, String>;

/// Raw part descriptor from `parts.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct RawPart {
    /// Name of the part whose surface this part inherits.
    #[serde(default)]
    pub extends: Option<String>,
    /// Marks the part returned by port lookups for unknown type tags.
    #[serde(default, deserialize_with = "null_as_false")]
    pub default: bool,
    #[serde(default)]
    pub methods: IndexMap<String, RawMethod>,
    #[serde(default)]
    pub properties: IndexMap<String, String>,
    #[serde(default)]
    pub events: IndexMap<String, Vec<RawEntry>>,
}

/// Raw method signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct RawMethod {
    /// Return type; the emitter falls back to the unit type when absent.
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub arguments: Vec<RawEntry>,
}

/// `null` reads as `false`.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Parse `parts.json` content into raw part descriptors.
pub fn parse_parts(json: &str) -> Result<RawParts, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod lib_tests;
