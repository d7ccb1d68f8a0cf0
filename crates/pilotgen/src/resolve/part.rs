//! Resolved part surface: validated and merged with its ancestors.

use indexmap::IndexMap;
use pilotgen_core::{RawEntry, RawPart};

use super::merge::merge_inherited;
use crate::PartError;

/// Name of the method whose parameter is synthesized from writable properties.
pub const CONFIGURE: &str = "Configure";

/// A validated `name: type` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// How a method's parameters are produced.
///
/// A method named exactly `Configure` is always `Configure`: its declared
/// arguments are ignored and the emitter builds a single record parameter
/// from the part's writable properties, each field optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MethodKind {
    Configure,
    Call { arguments: Vec<Param> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    /// Declared return type; `None` means the unit type.
    pub returns: Option<String>,
    pub kind: MethodKind,
}

/// A part with every inherited member merged in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub methods: IndexMap<String, Method>,
    pub properties: IndexMap<String, String>,
    pub events: IndexMap<String, Vec<Param>>,
}

impl Part {
    /// Validate a raw descriptor's own members (no inheritance).
    pub(super) fn from_raw(name: &str, raw: &RawPart) -> Result<Self, PartError> {
        let mut methods = IndexMap::with_capacity(raw.methods.len());
        for (method_name, method) in &raw.methods {
            let kind = if method_name == CONFIGURE {
                MethodKind::Configure
            } else {
                MethodKind::Call {
                    arguments: parse_params(name, &method.arguments, || {
                        format!("arguments of method `{method_name}`")
                    })?,
                }
            };
            methods.insert(
                method_name.clone(),
                Method {
                    returns: method.returns.clone(),
                    kind,
                },
            );
        }

        let mut events = IndexMap::with_capacity(raw.events.len());
        for (event_name, entries) in &raw.events {
            let params = parse_params(name, entries, || format!("event `{event_name}`"))?;
            events.insert(event_name.clone(), params);
        }

        Ok(Self {
            name: name.to_string(),
            methods,
            properties: raw.properties.clone(),
            events,
        })
    }

    /// Merge a fully resolved parent into this part (child wins).
    pub(super) fn inherit(&mut self, parent: &Part) {
        merge_inherited(&mut self.methods, &parent.methods);
        merge_inherited(&mut self.properties, &parent.properties);
        merge_inherited(&mut self.events, &parent.events);
    }
}

fn parse_params(
    part: &str,
    entries: &[RawEntry],
    location: impl Fn() -> String,
) -> Result<Vec<Param>, PartError> {
    entries
        .iter()
        .map(|entry| match entry.first() {
            Some((name, ty)) if entry.len() == 1 => Ok(Param::new(name, ty)),
            _ => Err(PartError::MalformedArgument {
                part: part.to_string(),
                location: location(),
                found: entry.len(),
            }),
        })
        .collect()
}
