//! Inheritance resolution for part descriptors.
//!
//! Parts are resolved lazily in file order. A part that `extends` another
//! resolves its parent first through the same memoized path, so a parent is
//! always fully merged (including its own ancestors) before any child sees
//! it. The memo doubles as the visited set; an in-progress stack turns a
//! looping `extends` chain into [`PartError::CyclicInheritance`].

mod merge;
mod part;


use indexmap::{IndexMap, IndexSet};
use pilotgen_core::{RawPart, RawParts};
use tracing::debug;

use crate::PartError;
use crate::config::Config;
use crate::typegen::luau::Emitter;

pub use merge::merge_inherited;
pub use part::{CONFIGURE, Method, MethodKind, Param, Part};

/// Output of the resolution pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Merged parts, in the order of the source mapping.
    pub parts: IndexMap<String, Part>,
    /// The single part marked `default: true`, if any.
    pub default_part: Option<String>,
}

/// Rendered part declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generated {
    /// Part name -> `type Name = {...}` text, in the order of the source mapping.
    pub declarations: IndexMap<String, String>,
    pub default_part: Option<String>,
}

impl Generated {
    /// All declarations, one after another.
    pub fn render(&self) -> String {
        self.declarations
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.declarations.keys().map(String::as_str)
    }
}

/// Resolve every part in `raw`.
pub fn resolve(raw: &RawParts) -> Result<Resolution, PartError> {
    Resolver::new(raw).run()
}

/// Resolve every part in `raw` and render one declaration per part.
pub fn generate(raw: &RawParts, config: &Config) -> Result<Generated, PartError> {
    let resolution = resolve(raw)?;
    let emitter = Emitter::new(config);
    let declarations = resolution
        .parts
        .iter()
        .map(|(name, part)| (name.clone(), emitter.emit_part(part)))
        .collect();

    Ok(Generated {
        declarations,
        default_part: resolution.default_part,
    })
}

struct Resolver<'a> {
    raw: &'a RawParts,
    /// Name -> merged part, in completion order (parents before children)
    resolved: IndexMap<String, Part>,
    /// Names whose parent chain is being walked
    in_progress: IndexSet<String>,
    /// Default-part accumulator
    default_part: Option<String>,
}

impl<'a> Resolver<'a> {
    fn new(raw: &'a RawParts) -> Self {
        Self {
            raw,
            resolved: IndexMap::with_capacity(raw.len()),
            in_progress: IndexSet::new(),
            default_part: None,
        }
    }

    fn run(mut self) -> Result<Resolution, PartError> {
        let raws = self.raw;
        for (name, raw) in raws {
            self.resolve_part(name, raw)?;
        }

        // Completion order puts parents first; report in source order instead.
        let mut parts = IndexMap::with_capacity(raws.len());
        for name in raws.keys() {
            if let Some(part) = self.resolved.swap_remove(name) {
                parts.insert(name.clone(), part);
            }
        }

        Ok(Resolution {
            parts,
            default_part: self.default_part,
        })
    }

    fn resolve_part(&mut self, name: &str, raw: &'a RawPart) -> Result<(), PartError> {
        if self.resolved.contains_key(name) {
            return Ok(());
        }

        if let Some(start) = self.in_progress.get_index_of(name) {
            let mut chain: Vec<String> = self.in_progress.iter().skip(start).cloned().collect();
            chain.push(name.to_string());
            return Err(PartError::CyclicInheritance { chain });
        }

        self.in_progress.insert(name.to_string());

        if let Some(parent_name) = &raw.extends {
            let raws = self.raw;
            let Some(parent_raw) = raws.get(parent_name) else {
                return Err(PartError::UnknownParent {
                    part: name.to_string(),
                    parent: parent_name.clone(),
                });
            };
            self.resolve_part(parent_name, parent_raw)?;
        }

        if raw.default {
            self.claim_default(name)?;
        }

        let mut part = Part::from_raw(name, raw)?;
        if let Some(parent_name) = &raw.extends {
            let parent = &self.resolved[parent_name.as_str()];
            part.inherit(parent);
            debug!(part = name, parent = %parent_name, "merged inherited members");
        }

        if part.events.is_empty() {
            return Err(PartError::EmptyEvents {
                part: name.to_string(),
            });
        }

        debug!(
            part = name,
            methods = part.methods.len(),
            properties = part.properties.len(),
            events = part.events.len(),
            "resolved part"
        );

        self.in_progress.pop();
        self.resolved.insert(name.to_string(), part);
        Ok(())
    }

    fn claim_default(&mut self, name: &str) -> Result<(), PartError> {
        if let Some(first) = &self.default_part {
            return Err(PartError::DuplicateDefault {
                first: first.clone(),
                second: name.to_string(),
            });
        }
        debug!(part = name, "claimed default part");
        self.default_part = Some(name.to_string());
        Ok(())
    }
}
