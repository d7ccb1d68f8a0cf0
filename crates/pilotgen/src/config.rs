//! Configuration for Luau emission.

/// Properties that `Configure` never accepts.
pub const READONLY_PROPERTIES: [&str; 4] = ["ClassName", "Position", "CFrame", "GUID"];

/// Configuration for Luau emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Member indentation inside a part type
    pub(crate) indent: String,
    /// Return type of methods without `returns`, and of event callbacks
    pub(crate) unit_type: String,
    /// Return type of `Connect`
    pub(crate) connection_type: String,
    /// First parameter type of the port lookup globals
    pub(crate) port_type: String,
    /// Properties excluded from the synthesized `Configure` parameter
    pub(crate) readonly_properties: Vec<String>,
    /// First line of standalone part definition files
    pub(crate) pragma: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            unit_type: "()".to_string(),
            connection_type: "EventConnection".to_string(),
            port_type: "PortLike".to_string(),
            readonly_properties: READONLY_PROPERTIES.iter().map(|s| s.to_string()).collect(),
            pragma: "--!nocheck".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member indentation.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Set the unit type used for missing return types.
    pub fn unit_type(mut self, value: impl Into<String>) -> Self {
        self.unit_type = value.into();
        self
    }

    /// Set the return type of `Connect`.
    pub fn connection_type(mut self, value: impl Into<String>) -> Self {
        self.connection_type = value.into();
        self
    }

    /// Set the port parameter type of the lookup globals.
    pub fn port_type(mut self, value: impl Into<String>) -> Self {
        self.port_type = value.into();
        self
    }

    /// Replace the read-only property names.
    pub fn readonly_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.readonly_properties = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pragma line of standalone files.
    pub fn pragma(mut self, value: impl Into<String>) -> Self {
        self.pragma = value.into();
        self
    }

    pub fn is_readonly(&self, property: &str) -> bool {
        self.readonly_properties.iter().any(|p| p == property)
    }
}
