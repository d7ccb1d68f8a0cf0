//! Port lookup globals.
//!
//! Each lookup gets one overload per known part, keyed by a string-literal
//! type tag, and a trailing fallback overload for any other tag that returns
//! the default part.

use crate::config::Config;

/// The two port lookup globals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortLookup {
    /// `GetPartFromPort`: returns one part.
    Single,
    /// `GetPartsFromPort`: returns a list of parts.
    Many,
}

impl PortLookup {
    pub const ALL: [PortLookup; 2] = [PortLookup::Single, PortLookup::Many];

    pub fn name(self) -> &'static str {
        match self {
            PortLookup::Single => "GetPartFromPort",
            PortLookup::Many => "GetPartsFromPort",
        }
    }

    fn return_type(self, part: &str) -> String {
        match self {
            PortLookup::Single => part.to_string(),
            PortLookup::Many => format!("{{{part}}}"),
        }
    }

    /// Overloads in part order, fallback last.
    pub fn overloads(self, parts: &[&str], default_part: &str, config: &Config) -> Vec<String> {
        let port = &config.port_type;
        let mut overloads: Vec<String> = parts
            .iter()
            .map(|part| {
                format!(
                    "((port: {port}, partType: \"{part}\") -> {})",
                    self.return_type(part)
                )
            })
            .collect();
        overloads.push(format!(
            "((port: {port}, partType: string) -> {})",
            self.return_type(default_part)
        ));
        overloads
    }

    /// `declare Name: overload\n    & overload ...` with a trailing newline.
    pub fn declaration(self, parts: &[&str], default_part: &str, config: &Config) -> String {
        let separator = format!("\n{}& ", config.indent);
        format!(
            "declare {}: {}\n",
            self.name(),
            self.overloads(parts, default_part, config).join(separator.as_str())
        )
    }
}

/// Both port lookup declarations.
pub fn emit_port_globals(parts: &[&str], default_part: &str, config: &Config) -> String {
    PortLookup::ALL
        .iter()
        .map(|lookup| lookup.declaration(parts, default_part, config))
        .collect()
}
