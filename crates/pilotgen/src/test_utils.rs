//! Test helpers for descriptor fixtures.

use pilotgen_core::{RawParts, parse_parts};

use crate::{Config, Generated, PartError, Resolution, generate, resolve};

/// Parse a JSON fixture, panicking on malformed JSON.
pub fn parts(json: &str) -> RawParts {
    parse_parts(json).unwrap_or_else(|e| panic!("fixture is not valid parts JSON: {e}"))
}

/// Resolve a fixture that is expected to be valid.
pub fn expect_resolved(json: &str) -> Resolution {
    resolve(&parts(json)).unwrap_or_else(|e| panic!("expected valid parts, got: {e}"))
}

/// Generate declarations for a fixture that is expected to be valid.
pub fn expect_generated(json: &str) -> Generated {
    generate(&parts(json), &Config::default())
        .unwrap_or_else(|e| panic!("expected valid parts, got: {e}"))
}

/// Rendered declarations for a fixture that is expected to be valid.
pub fn expect_types(json: &str) -> String {
    expect_generated(json).render()
}

/// Resolution error for a fixture that is expected to be invalid.
pub fn expect_error(json: &str) -> PartError {
    match resolve(&parts(json)) {
        Ok(resolution) => panic!(
            "expected an error, resolved: {:?}",
            resolution.parts.keys().collect::<Vec<_>>()
        ),
        Err(e) => e,
    }
}
